pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod rng;
pub mod sim;

use std::time::Instant;

use config::Params;
use error::GridError;
use grid::{Grid, Snapshot};
use rng::Rng;
use sim::RunReport;

/// Wall-clock cost of one simulation stage.
#[derive(Debug)]
pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Seed, populate, and run a full simulation.
///
/// `observer` sees every generation's snapshot and may stop the run by
/// returning false. `params.max_generations` composes an external cap into
/// the same seam; the engine itself never bounds the iteration count.
pub fn simulate<F>(
    seed: u64,
    width: i32,
    height: i32,
    params: &Params,
    mut observer: F,
) -> Result<(RunReport, Vec<Timing>), GridError>
where
    F: FnMut(&Snapshot) -> bool,
{
    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Construct the grid and seed the starting population
    let t = Instant::now();
    let mut grid = Grid::new(width, height)?;
    let mut rng = Rng::new(seed);
    grid.populate_random(params.coverage, &mut rng);
    timings.push(Timing {
        name: "populate",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Advance until stable, halted by the observer, or capped
    let t = Instant::now();
    let max_generations = params.max_generations;
    let mut seen = 0u64;
    let report = sim::run(&mut grid, |snapshot| {
        seen += 1;
        observer(snapshot) && max_generations.map_or(true, |max| seen < max)
    });
    timings.push(Timing {
        name: "run",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    Ok((report, timings))
}
