use std::path::Path;

use anyhow::Context;

use fechamento_engine::report::{self, CheckedDraw, ReportInput};
use fechamento_engine::{generator, scoring};
use fechamento_shared::DrawResult;

use super::{BaseArgs, DrawArgs, PrizeArgs};

pub fn run(
    base: &BaseArgs,
    draw: &DrawArgs,
    prizes: &PrizeArgs,
    out: Option<&Path>,
    page_lines: usize,
) -> anyhow::Result<()> {
    let base = base.selection()?;
    let batch = generator::generate(&base);

    // without a draw the report still lists the tickets, unchecked
    let draw = draw.resolve()?;
    if draw.is_none() {
        log::info!("no result given; rendering an unchecked report");
    }
    let table = prizes.table(draw.as_ref().and_then(|d| d.contest.as_ref()))?;

    let result = draw.as_ref().and_then(|d| match DrawResult::new(&d.numbers) {
        Ok(result) => Some(result),
        Err(e) => {
            log::warn!("report without result: {}", e);
            None
        }
    });
    let summary = result.as_ref().map(|r| scoring::score(&batch, r, &table));

    let mut input = ReportInput::new(&batch)
        .with_stake(table.stake)
        .with_page_lines(page_lines);
    if let (Some(result), Some(summary)) = (&result, &summary) {
        let contest = draw
            .as_ref()
            .and_then(|d| d.contest.as_ref())
            .filter(|c| c.matches(result))
            .map(|c| c.contest);
        input = input.with_check(CheckedDraw {
            result,
            summary,
            contest,
        });
    }
    let text = report::render(&input);

    match out {
        Some(path) => {
            std::fs::write(path, &text).with_context(|| format!("failed to write {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}
