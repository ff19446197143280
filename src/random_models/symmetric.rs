use crate::matrix::DistanceMatrix;
use crate::tour::Cost;
use rand::Rng;

/// Samples a random symmetric distance matrix over `n` cities with a zero
/// diagonal and off-diagonal entries drawn uniformly from `0..=max_cost`.
/// Only the upper triangle is sampled and then mirrored, so the result is
/// symmetric by construction.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_symmetric_matrix<R: Rng>(rng: &mut R, n: usize, max_cost: Cost) -> DistanceMatrix {
    assert!(n > 0);

    let mut rows = vec![vec![0 as Cost; n]; n];
    for u in 0..n {
        for v in (u + 1)..n {
            let cost = rng.gen_range(0..=max_cost);
            rows[u][v] = cost;
            rows[v][u] = cost;
        }
    }

    DistanceMatrix::from_rows(&rows).expect("rows form a square matrix")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn generated_matrices_are_symmetric_with_zero_diagonal() {
        let mut rng = Pcg64Mcg::seed_from_u64(1234);

        for n in 1..10 {
            let matrix = random_symmetric_matrix(&mut rng, n, 50);
            assert_eq!(matrix.len(), n);
            assert!(matrix.is_symmetric());
            for u in matrix.cities() {
                assert_eq!(matrix.cost(u, u), 0);
            }
            assert!(matrix.max_cost() <= 50);
        }
    }

    #[test]
    fn seeding_is_deterministic() {
        let a = random_symmetric_matrix(&mut Pcg64Mcg::seed_from_u64(7), 6, 100);
        let b = random_symmetric_matrix(&mut Pcg64Mcg::seed_from_u64(7), 6, 100);
        assert_eq!(a, b);
    }
}
