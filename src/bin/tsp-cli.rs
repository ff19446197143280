#![deny(warnings)]

use itertools::Itertools;
use log::*;
use std::convert::TryFrom;
use std::iter::once;
use std::time::Instant;
use structopt::StructOpt;

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use tsp_exact::errors::Result;
use tsp_exact::exact::{brute_force_optimal_tour, held_karp_optimal_tour};
use tsp_exact::matrix::DistanceMatrix;
use tsp_exact::random_models::symmetric::random_symmetric_matrix;
use tsp_exact::tour::{tour_cost, City, Cost};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tsp-cli",
    about = "Computes an optimal traveling salesman tour for a small distance matrix."
)]
struct Opt {
    /// Solver. 'brute-force', 'held-karp', 'both'. Defaults to 'both'.
    #[structopt(short, long, default_value = "both")]
    mode: String,

    /// Solve a randomly sampled symmetric instance with this many cities
    /// instead of the built-in four-city example.
    #[structopt(short, long)]
    random_cities: Option<usize>,

    /// Largest edge cost when sampling a random instance
    #[structopt(long, default_value = "100")]
    max_cost: Cost,

    /// Seed value for random instances
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

// Solver ////////////////////////////////////////////
#[derive(PartialEq, Debug)]
enum Solver {
    BruteForce,
    HeldKarp,
    Both,
}

impl TryFrom<&str> for Solver {
    type Error = String;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "brute-force" => Ok(Solver::BruteForce),
            "held-karp" => Ok(Solver::HeldKarp),
            "both" => Ok(Solver::Both),
            _ => Err(format!("'{}' is an invalid Solver.", value)),
        }
    }
}

/// The four-city instance of the classic textbook example; its optimal
/// cycle 0 -> 1 -> 3 -> 2 -> 0 costs 80.
fn example_matrix() -> DistanceMatrix {
    DistanceMatrix::from_rows(&[
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
    .expect("example matrix is square")
}

fn format_cycle(tour: &[City]) -> String {
    tour.iter().chain(once(&tour[0])).join(" -> ")
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    tsp_exact::log::build_solver_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    let mode: Solver =
        Solver::try_from(opt.mode.as_str()).expect("Failed parsing 'mode' parameter: ");

    let matrix = match opt.random_cities {
        Some(n) => {
            let mut rng = match opt.seed {
                Some(s) => Pcg64Mcg::seed_from_u64(s),
                None => Pcg64Mcg::from_entropy(),
            };
            random_symmetric_matrix(&mut rng, n, opt.max_cost)
        }
        None => example_matrix(),
    };

    info!(
        "Running in mode {:?} on an instance with n={}",
        mode,
        matrix.len()
    );

    let mut brute_cost = None;
    if mode != Solver::HeldKarp {
        let start = Instant::now();
        let (tour, cost) = brute_force_optimal_tour(&matrix)?;
        info!("Brute force finished in {}ms", start.elapsed().as_millis());

        println!("Brute force cost: {}", cost);
        println!("Brute force tour: {}", format_cycle(&tour));
        brute_cost = Some(cost);
    }

    if mode != Solver::BruteForce {
        let start = Instant::now();
        let (tour, cost) = held_karp_optimal_tour(&matrix)?;
        info!("Held-Karp finished in {}ms", start.elapsed().as_millis());

        println!("Held-Karp cost:   {}", cost);
        println!("Held-Karp tour:   {}", format_cycle(&tour));

        // both exact solvers have to agree
        if let Some(brute_cost) = brute_cost {
            assert_eq!(cost, brute_cost);
        }
        assert_eq!(tour_cost(&tour, &matrix)?, cost);
    }

    info!("Done");

    Ok(())
}
