use thiserror::Error;

/// Failures surfaced by the solvers. All computation is pure and
/// deterministic, so no error is ever worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TspError {
    /// The distance matrix is malformed (not square or empty), or a tour
    /// does not match the matrix it is evaluated against.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An accumulated tour cost exceeded the range of [`crate::tour::Cost`].
    #[error("accumulated cost overflowed the cost type")]
    Overflow,

    /// No Hamiltonian cycle exists. Cannot occur for a complete distance
    /// matrix; present only for matrices encoding missing edges.
    #[error("no feasible tour exists")]
    Infeasible,
}

pub type Result<T> = std::result::Result<T, TspError>;
