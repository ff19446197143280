use crate::errors::{Result, TspError};
use crate::matrix::DistanceMatrix;

pub type City = u32;
pub type Cost = u64;

/// An ordered visiting sequence over all cities; implicitly closes back
/// from its last element to its first.
pub type Tour = Vec<City>;

/// Computes the total cost of the cycle `tour[0] -> tour[1] -> ... ->
/// tour[n-1] -> tour[0]`. The result is invariant under rotation of the
/// tour and, for symmetric matrices, under reversal.
///
/// Fails with [`TspError::InvalidInput`] if the tour length does not match
/// the matrix dimension or any index is out of range, and with
/// [`TspError::Overflow`] if the summed cost exceeds [`Cost`].
pub fn tour_cost(tour: &[City], matrix: &DistanceMatrix) -> Result<Cost> {
    if tour.len() != matrix.len() {
        return Err(TspError::InvalidInput(format!(
            "tour visits {} cities but the matrix has {}",
            tour.len(),
            matrix.len()
        )));
    }

    if let Some(&city) = tour.iter().find(|&&c| c >= matrix.number_of_cities()) {
        return Err(TspError::InvalidInput(format!(
            "tour contains city {} outside of 0..{}",
            city,
            matrix.number_of_cities()
        )));
    }

    let mut total: Cost = 0;
    for i in 0..tour.len() {
        let u = tour[i];
        let v = tour[(i + 1) % tour.len()];
        total = total
            .checked_add(matrix.cost(u, v))
            .ok_or(TspError::Overflow)?;
    }

    Ok(total)
}
