pub mod errors;
pub mod exact;
pub mod log;
pub mod matrix;
pub mod random_models;
pub mod tour;
pub mod utils;
