use crate::errors::{Result, TspError};
use crate::tour::{City, Cost};
use itertools::Itertools;
use std::fmt;
use std::ops::Range;

/// A complete, read-only distance matrix over cities `0..n`. Entry `(i, j)`
/// is the cost of traveling directly from city *i* to city *j*. Stored
/// row-major in a single allocation; entries are unsigned, so negative
/// costs cannot be represented. The matrix is not required to be symmetric
/// and the diagonal is conventionally zero but not enforced.
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    costs: Vec<Cost>,
}

impl DistanceMatrix {
    /// Builds a matrix from row slices. Fails with [`TspError::InvalidInput`]
    /// if there are no rows or any row length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<Cost>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::InvalidInput(
                "distance matrix must contain at least one city".into(),
            ));
        }

        if let Some(row) = rows.iter().find(|row| row.len() != n) {
            return Err(TspError::InvalidInput(format!(
                "distance matrix must be square: got a row of length {} for n={}",
                row.len(),
                n
            )));
        }

        Ok(Self {
            n,
            costs: rows.iter().flatten().copied().collect(),
        })
    }

    /// Builds an `n`x`n` matrix by evaluating `entry(i, j)` for every pair.
    pub fn from_fn<F: FnMut(City, City) -> Cost>(n: usize, mut entry: F) -> Result<Self> {
        if n == 0 {
            return Err(TspError::InvalidInput(
                "distance matrix must contain at least one city".into(),
            ));
        }

        let mut costs = Vec::with_capacity(n * n);
        for i in 0..n as City {
            for j in 0..n as City {
                costs.push(entry(i, j));
            }
        }
        Ok(Self { n, costs })
    }

    /// Returns the number of cities as a [`City`]
    pub fn number_of_cities(&self) -> City {
        self.n as City
    }

    /// Returns the number of cities as usize
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        false // n >= 1 by construction
    }

    /// Returns an iterator over all cities `0..n`
    pub fn cities(&self) -> Range<City> {
        0..self.number_of_cities()
    }

    /// Returns the direct travel cost from `u` to `v`.
    /// **Panics if u, v >= n**
    pub fn cost(&self, u: City, v: City) -> Cost {
        self.costs[self.n * u as usize + v as usize]
    }

    /// Returns *true* exactly if `cost(u, v) == cost(v, u)` for all pairs
    pub fn is_symmetric(&self) -> bool {
        self.cities()
            .tuple_combinations()
            .all(|(u, v)| self.cost(u, v) == self.cost(v, u))
    }

    /// Largest entry of the matrix; handy to bound accumulated tour costs
    pub fn max_cost(&self) -> Cost {
        self.costs.iter().copied().max().unwrap()
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DistanceMatrix(n={})", self.n)?;
        for u in self.cities() {
            writeln!(
                f,
                "{}",
                self.cities().map(|v| self.cost(u, v)).join(" ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(
            DistanceMatrix::from_rows(&[]),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_rows_rejects_non_square() {
        let rows = vec![vec![0, 1], vec![1, 0, 2]];
        assert!(matches!(
            DistanceMatrix::from_rows(&rows),
            Err(TspError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_rows_indexing() {
        let m = DistanceMatrix::from_rows(&[vec![0, 7], vec![3, 0]]).unwrap();
        assert_eq!(m.number_of_cities(), 2);
        assert_eq!(m.cost(0, 1), 7);
        assert_eq!(m.cost(1, 0), 3);
        assert!(!m.is_symmetric());
        assert_eq!(m.max_cost(), 7);
    }

    #[test]
    fn from_fn_matches_rows() {
        let rows = vec![vec![0, 2, 4], vec![2, 0, 6], vec![4, 6, 0]];
        let from_rows = DistanceMatrix::from_rows(&rows).unwrap();
        let from_fn =
            DistanceMatrix::from_fn(3, |u, v| rows[u as usize][v as usize]).unwrap();
        assert_eq!(from_rows, from_fn);
        assert!(from_rows.is_symmetric());
    }
}
