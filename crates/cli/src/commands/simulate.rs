use fechamento_engine::{generator, runner};
use fechamento_shared::config::SimulationConfig;

use super::{BaseArgs, PrizeArgs};
use crate::output;

pub fn run(
    base: &BaseArgs,
    prizes: &PrizeArgs,
    draws: u32,
    workers: usize,
    seed_start: u64,
    seed_stride: u64,
) -> anyhow::Result<()> {
    let batch = generator::generate(&base.selection()?);
    let table = prizes.table(None)?;
    let n_workers = if workers == 0 { None } else { Some(workers) };
    let config = SimulationConfig {
        n_draws: draws,
        seed_start,
        seed_stride,
    };

    println!("Running {} random draws against {} tickets...", draws, batch.len());

    let start = std::time::Instant::now();
    let report = runner::run_simulation(&batch, &table, &config, n_workers)?;
    let elapsed = start.elapsed();

    output::print_simulation(&report, elapsed);
    Ok(())
}
