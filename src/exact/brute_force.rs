use crate::errors::Result;
use crate::matrix::DistanceMatrix;
use crate::tour::{tour_cost, City, Cost, Tour};
use crate::utils::for_each_permutation;
use itertools::Itertools;

/// Exhaustive search over all n! visiting orders to provide
/// cross-validation for the asymptotically faster Held-Karp solver.
///
/// Evaluates every permutation of the city set with [`tour_cost`] and
/// keeps the strict minimum, so among equally cheap tours the first one
/// generated wins. Since a matrix always has n >= 1 cities, a tour always
/// exists. Runs in O(n!·n) time; only viable for small instances.
pub fn brute_force_optimal_tour(matrix: &DistanceMatrix) -> Result<(Tour, Cost)> {
    let mut cities: Vec<City> = matrix.cities().collect_vec();

    let mut best: Option<(Tour, Cost)> = None;
    let mut failure = None;

    for_each_permutation(&mut cities, |tour| {
        match tour_cost(tour, matrix) {
            Ok(cost) => {
                if best.as_ref().map_or(true, |&(_, b)| cost < b) {
                    best = Some((tour.to_vec(), cost));
                }
            }
            Err(e) => failure = Some(e),
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(best.expect("matrix has at least one city")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TspError;

    #[test]
    fn single_city() {
        let matrix = DistanceMatrix::from_rows(&[vec![0]]).unwrap();
        assert_eq!(brute_force_optimal_tour(&matrix), Ok((vec![0], 0)));
    }

    #[test]
    fn two_cities_doubles_the_edge() {
        let matrix = DistanceMatrix::from_rows(&[vec![0, 21], vec![21, 0]]).unwrap();
        let (tour, cost) = brute_force_optimal_tour(&matrix).unwrap();
        assert_eq!(cost, 42);
        assert_eq!(tour.len(), 2);
    }

    #[test]
    fn four_city_example() {
        let matrix = DistanceMatrix::from_rows(&[
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap();

        let (tour, cost) = brute_force_optimal_tour(&matrix).unwrap();
        assert_eq!(cost, 80);
        // the returned tour must itself evaluate to the reported cost
        assert_eq!(tour_cost(&tour, &matrix), Ok(80));
    }

    #[test]
    fn asymmetric_matrix() {
        // cheap cycle 0 -> 1 -> 2 -> 0 costs 3; the reverse costs 30
        let matrix = DistanceMatrix::from_rows(&[
            vec![0, 1, 10],
            vec![10, 0, 1],
            vec![1, 10, 0],
        ])
        .unwrap();
        let (tour, cost) = brute_force_optimal_tour(&matrix).unwrap();
        assert_eq!(cost, 3);
        assert_eq!(tour_cost(&tour, &matrix), Ok(3));
    }

    #[test]
    fn surfaces_overflow() {
        let matrix =
            DistanceMatrix::from_rows(&[vec![0, Cost::MAX], vec![Cost::MAX, 0]]).unwrap();
        assert_eq!(brute_force_optimal_tour(&matrix), Err(TspError::Overflow));
    }
}
