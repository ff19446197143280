#![deny(warnings)]

use log::*;
use std::time::Instant;
use structopt::StructOpt;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use tsp_exact::errors::Result;
use tsp_exact::exact::{brute_force_optimal_tour, held_karp_optimal_cost, held_karp_optimal_tour};
use tsp_exact::random_models::symmetric::random_symmetric_matrix;
use tsp_exact::tour::{tour_cost, Cost};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tsp-stress-tests",
    about = "Cross-validates the Held-Karp solver against brute force on random instances."
)]
struct Opt {
    /// Number of random instances to check
    #[structopt(short, long, default_value = "100")]
    instances: usize,

    /// Smallest instance size to sample
    #[structopt(long, default_value = "4")]
    min_cities: usize,

    /// Largest instance size to sample; brute force limits how far this can go
    #[structopt(long, default_value = "9")]
    max_cities: usize,

    /// Largest sampled edge cost
    #[structopt(long, default_value = "1000")]
    max_cost: Cost,

    /// Seed value
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    tsp_exact::log::build_solver_logger_for_verbosity(LevelFilter::Info, opt.verbose);

    assert!(opt.min_cities >= 1);
    assert!(opt.min_cities <= opt.max_cities);

    let mut rng = match opt.seed {
        Some(s) => Pcg64Mcg::seed_from_u64(s),
        None => Pcg64Mcg::from_entropy(),
    };

    let start = Instant::now();
    for completed in 0..opt.instances {
        let n = rng.gen_range(opt.min_cities..=opt.max_cities);
        let matrix = random_symmetric_matrix(&mut rng, n, opt.max_cost);

        let (_, brute_cost) = brute_force_optimal_tour(&matrix)?;
        let dp_cost = held_karp_optimal_cost(&matrix)?;
        let (dp_tour, dp_tour_cost) = held_karp_optimal_tour(&matrix)?;

        if brute_cost != dp_cost || brute_cost != dp_tour_cost {
            error!(
                "solvers disagree: brute force = {}, Held-Karp = {}/{} on {:?}",
                brute_cost, dp_cost, dp_tour_cost, matrix
            );
        }

        assert_eq!(brute_cost, dp_cost);
        assert_eq!(brute_cost, dp_tour_cost);
        assert_eq!(tour_cost(&dp_tour, &matrix)?, brute_cost);

        if completed > 0 && completed % 20 == 0 {
            info!("Completed {} instances", completed);
        }
    }

    info!(
        "Validated {} instances in {}ms",
        opt.instances,
        start.elapsed().as_millis()
    );

    Ok(())
}
