use anyhow::Context;

use fechamento_engine::{generator, scoring};
use fechamento_shared::DrawResult;

use super::{BaseArgs, DrawArgs, PrizeArgs};
use crate::output;

pub fn run(base: &BaseArgs, draw: &DrawArgs, prizes: &PrizeArgs) -> anyhow::Result<()> {
    let base = base.selection()?;
    let draw = draw
        .resolve()?
        .context("no draw result: pass --result or --primary/--fallback, or drop --offline")?;
    let table = prizes.table(draw.contest.as_ref())?;

    let batch = generator::generate(&base);
    let summary = scoring::score_numbers(&batch, &draw.numbers, &table);
    if !summary.scored {
        log::warn!(
            "result incomplete ({} numbers given, 15 distinct numbers in 1..=25 needed); nothing scored",
            draw.numbers.len()
        );
    }

    let result = DrawResult::new(&draw.numbers).ok();
    if let (Some(contest), Some(result)) = (&draw.contest, &result) {
        if contest.matches(result) {
            println!("Official result of contest {}", contest.contest);
        }
    }

    output::print_batch(&batch, result.as_ref().filter(|_| summary.scored).map(|r| (r, &summary)));
    output::print_summary(&summary, &table, batch.len());
    Ok(())
}
