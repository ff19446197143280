pub mod combinations;
pub mod permutations;

pub use combinations::*;
pub use permutations::*;
