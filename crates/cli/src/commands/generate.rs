use anyhow::Context;

use fechamento_engine::generator;
use fechamento_engine::random::{fresh_seed, random_base};
use fechamento_shared::BaseSelection;

use super::parse_numbers;
use crate::output;

pub fn run(numbers: &[String], random: bool, seed: Option<u64>) -> anyhow::Result<()> {
    let base = if random {
        let seed = seed.unwrap_or_else(fresh_seed);
        println!("Random base selection (seed {})", seed);
        random_base(seed)?
    } else {
        let numbers = parse_numbers(numbers)?;
        BaseSelection::new(&numbers).context("invalid base selection")?
    };

    let batch = generator::generate(&base);
    output::print_batch(&batch, None);
    Ok(())
}
