use std::process::ExitCode;

use pareto_spt::demo::{DemoRequest, Network, plan};
use pareto_spt::domain::{PathState, VertexId};
use pareto_spt::spt::DominanceConfig;
use tracing_subscriber::EnvFilter;

/// Grid size of the demo network.
const GRID_SIZE: usize = 12;

/// Block length of the demo network in metres.
const BLOCK_M: f64 = 150.0;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Optional JSON file overriding the dominance tolerances
    let dominance = match std::env::args().nth(1) {
        Some(path) => match DominanceConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => DominanceConfig::default(),
    };

    let network = Network::grid(GRID_SIZE, GRID_SIZE, BLOCK_M);
    let destination = VertexId::new((GRID_SIZE * GRID_SIZE - 1) as u32);

    let result = match plan(&network, DemoRequest::default(), dominance) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", result.tree);
    println!(
        "Accepted {} states, expanded {}, skipped {} pruned, rejected {}",
        result.stats.accepted,
        result.stats.expanded,
        result.stats.skipped,
        result.stats.rejected
    );

    match result.best(destination) {
        Some(best) => println!(
            "Best at {destination}: cost {:.1}, {} min, walked {:.0} m, mode {}",
            best.weight(),
            best.elapsed_time().num_minutes(),
            best.walk_distance(),
            best.mode()
        ),
        None => println!("No acceptable path to {destination}"),
    }

    result.tree.dump();

    ExitCode::SUCCESS
}
