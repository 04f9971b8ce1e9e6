use std::time::Duration;

use rust_decimal::Decimal;

use fechamento_engine::source::ContestResult;
use fechamento_shared::money::format_brl;
use fechamento_shared::result::SimulationReport;
use fechamento_shared::words::amount_in_words;
use fechamento_shared::{DrawResult, PrizeTable, ScoreSummary, TicketBatch};

pub fn print_batch(batch: &TicketBatch, checked: Option<(&DrawResult, &ScoreSummary)>) {
    println!("Base: {}", batch.base());
    println!("{} tickets ({} distinct)", batch.len(), batch.distinct_count());
    for (i, ticket) in batch.iter().enumerate() {
        match checked {
            Some((_, summary)) => {
                let hits = summary.hits.get(i).copied().unwrap_or(0);
                println!("  {:02}: {}  ({} hits)", i + 1, ticket, hits);
            }
            None => println!("  {:02}: {}", i + 1, ticket),
        }
    }
    if let Some((result, _)) = checked {
        println!("Result: {}", result);
    }
}

pub fn print_summary(summary: &ScoreSummary, prizes: &PrizeTable, tickets: usize) {
    println!("\n========================================");
    println!("  Tickets:     {} x {}", tickets, format_brl(prizes.stake));
    if summary.scored {
        for (hits, count) in summary.histogram.iter() {
            if count > 0 {
                println!(
                    "  {} hits:     {:>2} x {}",
                    hits,
                    count,
                    format_brl(prizes.prize_for(hits))
                );
            }
        }
    } else {
        println!("  Not scored");
    }
    println!("  Cost:        {}", format_brl(summary.cost));
    println!("  Gross:       {}", format_brl(summary.gross));
    println!("  Net:         {}", format_brl(summary.net));
    if let Some(words) = net_in_words(summary) {
        println!("  ({})", words);
    }
    println!("  Outcome:     {}", if summary.is_profit() { "PROFIT" } else { "LOSS" });
    println!("========================================");
}

/// Only a positive net is spelled out; the words carry no sign.
fn net_in_words(summary: &ScoreSummary) -> Option<String> {
    (summary.net > Decimal::ZERO).then(|| amount_in_words(summary.net))
}

pub fn print_contest(contest: &ContestResult) {
    println!("Contest:  {}", contest.contest);
    if let Some(date) = &contest.date {
        println!("Date:     {}", date);
    }
    println!("Result:   {}", contest.result);
    for (hits, prize) in &contest.prizes {
        println!("  {} hits: {}", hits, format_brl(*prize));
    }
}

pub fn print_simulation(report: &SimulationReport, elapsed: Duration) {
    let draws = report.n_draws();
    println!("\n========================================");
    println!("  Draws:       {}", draws);
    println!("  Time:        {:.2}s", elapsed.as_secs_f64());
    println!(
        "  Inside base: {} ({:.2}%)",
        report.draws_inside_base,
        100.0 * report.draws_inside_base as f64 / draws.max(1) as f64
    );
    println!("  Profitable:  {}", report.profitable_draws());
    for (hits, count) in report.histogram.iter() {
        println!("  {} hits:     {}", hits, count);
    }
    println!("  Total cost:  {}", format_brl(report.total_cost));
    println!("  Total gross: {}", format_brl(report.total_gross));
    println!("  Total net:   {}", format_brl(report.total_net()));
    println!("  Avg net:     {}", format_brl(report.avg_net()));
    if let Some(best) = report.best() {
        println!("  Best draw:   seed {} net {}", best.seed, format_brl(best.net));
    }
    println!("========================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_in_words_only_for_profit() {
        let stake = PrizeTable::default().stake;
        let mut summary = ScoreSummary::zeroed(50, stake);
        assert!(summary.net < Decimal::ZERO);
        assert_eq!(net_in_words(&summary), None);

        summary.net = Decimal::ZERO;
        assert_eq!(net_in_words(&summary), None);

        summary.net = Decimal::new(17_500, 2);
        assert_eq!(net_in_words(&summary).as_deref(), Some("Cento e setenta e cinco reais"));
    }
}
