use rayon::prelude::*;
use rust_decimal::Decimal;

use fechamento_shared::config::SimulationConfig;
use fechamento_shared::result::{DrawOutcome, SimulationReport};
use fechamento_shared::{PrizeTable, SelectionError, TicketBatch};

use crate::random::random_draw;
use crate::scoring;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("invalid random draw: {0}")]
    Draw(#[from] SelectionError),
}

fn simulate_draw(batch: &TicketBatch, prizes: &PrizeTable, seed: u64) -> Result<DrawOutcome, SelectionError> {
    let result = random_draw(seed)?;
    let summary = scoring::score(batch, &result, prizes);
    Ok(DrawOutcome {
        seed,
        histogram: summary.histogram,
        gross: summary.gross,
        net: summary.net,
        inside_base: result.is_inside(batch.base()),
    })
}

/// Scores the batch against `config.n_draws` random draws.
///
/// Outcomes are ordered by draw index, so the report does not depend on the
/// number of workers.
pub fn run_simulation(
    batch: &TicketBatch,
    prizes: &PrizeTable,
    config: &SimulationConfig,
    n_workers: Option<usize>,
) -> Result<SimulationReport, RunnerError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8)))
        .build()?;

    log::debug!(
        "simulating {} draws (seed {} stride {})",
        config.n_draws,
        config.seed_start,
        config.seed_stride
    );

    let outcomes: Result<Vec<DrawOutcome>, _> = pool.install(|| {
        (0..config.n_draws)
            .into_par_iter()
            .map(|i| simulate_draw(batch, prizes, config.seed_for(i)))
            .collect()
    });

    let cost_per_draw = prizes.stake * Decimal::from(batch.len() as u64);
    Ok(SimulationReport::from_outcomes(outcomes?, cost_per_draw))
}

pub fn run_default_simulation(
    batch: &TicketBatch,
    prizes: &PrizeTable,
    n_draws: u32,
    n_workers: Option<usize>,
) -> Result<SimulationReport, RunnerError> {
    let config = SimulationConfig {
        n_draws,
        ..SimulationConfig::default()
    };
    run_simulation(batch, prizes, &config, n_workers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_from_numbers;

    #[test]
    fn test_outcome_order_follows_seeds() {
        let batch = generate_from_numbers(&(1..=19).collect::<Vec<u8>>()).unwrap();
        let config = SimulationConfig { n_draws: 16, seed_start: 100, seed_stride: 3 };
        let report = run_simulation(&batch, &PrizeTable::default(), &config, Some(2)).unwrap();
        let seeds: Vec<u64> = report.outcomes.iter().map(|o| o.seed).collect();
        let expected: Vec<u64> = (0..16).map(|i| 100 + 3 * i).collect();
        assert_eq!(seeds, expected);
        assert_eq!(report.total_cost, Decimal::new(17_500, 2) * Decimal::from(16u32));
    }

    #[test]
    fn test_empty_run() {
        let batch = generate_from_numbers(&(1..=19).collect::<Vec<u8>>()).unwrap();
        let report = run_default_simulation(&batch, &PrizeTable::default(), 0, Some(1)).unwrap();
        assert_eq!(report.n_draws(), 0);
        assert_eq!(report.avg_net(), Decimal::ZERO);
        assert!(report.best().is_none());
    }
}
