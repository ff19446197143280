use crate::errors::{Result, TspError};
use crate::matrix::DistanceMatrix;
use crate::tour::{City, Cost, Tour};
use crate::utils::combinations;
use itertools::Itertools;

/// A set of non-origin cities encoded with bit *i* set iff city *i* is a
/// member. City 0 is the fixed tour origin and never appears in a mask.
pub type SubsetMask = u32;

/// Mask width bounds the instance size. The DP table is dense in
/// `n * 2^n`, so memory runs out long before this limit matters.
const MAX_CITIES: usize = 31;

/// Dense table over (subset, terminal city) states. Entry `(mask, j)` is
/// only meaningful for `j` in `mask` and holds the cheapest cost of a path
/// from city 0 through exactly the cities of `mask`, ending at `j`,
/// together with the predecessor of `j` on that path. Indexed
/// `mask * n + j` to avoid hashing; unreachable states stay `None`.
struct DpTable {
    n: usize,
    entries: Vec<Option<(Cost, City)>>,
}

impl DpTable {
    fn new(n: usize) -> Self {
        Self {
            n,
            entries: vec![None; n << n],
        }
    }

    fn get(&self, mask: SubsetMask, last: City) -> Option<(Cost, City)> {
        self.entries[mask as usize * self.n + last as usize]
    }

    fn set(&mut self, mask: SubsetMask, last: City, entry: Option<(Cost, City)>) {
        self.entries[mask as usize * self.n + last as usize] = entry;
    }
}

fn full_mask(n: usize) -> SubsetMask {
    // all of {1, ..., n-1}; bit 0 stays clear
    ((1 as SubsetMask) << n) - 2
}

/// Fills the DP table level by level: subsets of size 1 are seeded from
/// the edges leaving city 0, and each size-r subset is extended from its
/// size-(r-1) predecessors. Lookups of absent states are skipped.
fn run_dp(matrix: &DistanceMatrix) -> Result<DpTable> {
    let n = matrix.len();
    assert!(
        n <= MAX_CITIES,
        "Held-Karp subset masks support at most {} cities",
        MAX_CITIES
    );

    let mut table = DpTable::new(n);

    for i in 1..n as City {
        table.set(1 << i, i, Some((matrix.cost(0, i), 0)));
    }

    let inner_cities = (1..n as City).collect_vec();
    for r in 2..n {
        for subset in combinations(&inner_cities, r) {
            let mask: SubsetMask = subset.iter().fold(0, |m, &c| m | (1 << c));

            for &j in &subset {
                let without_j = mask ^ (1 << j);

                let mut best: Option<(Cost, City)> = None;
                for &k in &subset {
                    if k == j {
                        continue;
                    }
                    if let Some((cost, _)) = table.get(without_j, k) {
                        let candidate = cost
                            .checked_add(matrix.cost(k, j))
                            .ok_or(TspError::Overflow)?;
                        if best.map_or(true, |(b, _)| candidate < b) {
                            best = Some((candidate, k));
                        }
                    }
                }

                table.set(mask, j, best);
            }
        }
    }

    Ok(table)
}

/// Closes the cycle: over all terminal cities j of the full inner-city
/// subset, minimizes `cost(full, j) + d(j, 0)` and remembers the winner.
fn best_closing(table: &DpTable, matrix: &DistanceMatrix) -> Result<(Cost, City)> {
    let full = full_mask(matrix.len());

    let mut best: Option<(Cost, City)> = None;
    for j in 1..matrix.number_of_cities() {
        if let Some((cost, _)) = table.get(full, j) {
            let closed = cost
                .checked_add(matrix.cost(j, 0))
                .ok_or(TspError::Overflow)?;
            if best.map_or(true, |(b, _)| closed < b) {
                best = Some((closed, j));
            }
        }
    }

    best.ok_or(TspError::Infeasible)
}

/// Computes the minimum cost of a Hamiltonian cycle through all cities,
/// starting and ending at city 0, with the Held-Karp dynamic program over
/// (visited-subset, last-city) states.
///
/// Runs in O(n²·2ⁿ) time and O(n·2ⁿ) space — exponential, but far below
/// the n! of [`crate::exact::brute_force_optimal_tour`], with which it
/// must always agree on the cost. The table is local to the call.
pub fn held_karp_optimal_cost(matrix: &DistanceMatrix) -> Result<Cost> {
    if matrix.len() == 1 {
        return Ok(matrix.cost(0, 0));
    }

    let table = run_dp(matrix)?;
    Ok(best_closing(&table, matrix)?.0)
}

/// Like [`held_karp_optimal_cost`], but additionally reconstructs the
/// optimal tour by walking predecessor links back from the optimal
/// closing city through ever smaller subsets to city 0. The returned tour
/// starts at city 0 and evaluates to the returned cost.
pub fn held_karp_optimal_tour(matrix: &DistanceMatrix) -> Result<(Tour, Cost)> {
    if matrix.len() == 1 {
        return Ok((vec![0], matrix.cost(0, 0)));
    }

    let table = run_dp(matrix)?;
    let (cost, closing) = best_closing(&table, matrix)?;

    let mut tour = Vec::with_capacity(matrix.len());
    let mut mask = full_mask(matrix.len());
    let mut last = closing;
    while last != 0 {
        tour.push(last);
        let (_, predecessor) = table
            .get(mask, last)
            .expect("predecessor chain is written for every state on the optimal path");
        mask ^= 1 << last;
        last = predecessor;
    }
    tour.push(0);
    tour.reverse();

    Ok((tour, cost))
}
