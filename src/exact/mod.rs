pub mod brute_force;
pub mod held_karp;

pub use brute_force::brute_force_optimal_tour;
pub use held_karp::{held_karp_optimal_cost, held_karp_optimal_tour};
