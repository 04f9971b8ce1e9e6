use rust_decimal::Decimal;

use fechamento_shared::{DrawResult, HitHistogram, PrizeTable, ScoreSummary, Ticket, TicketBatch};

#[inline]
pub fn hit_count(ticket: &Ticket, result: &DrawResult) -> u8 {
    ticket.numbers().iter().filter(|&&n| result.contains(n)).count() as u8
}

/// Scores every ticket of the batch against a complete draw.
pub fn score(batch: &TicketBatch, result: &DrawResult, prizes: &PrizeTable) -> ScoreSummary {
    let hits: Vec<u8> = batch.iter().map(|ticket| hit_count(ticket, result)).collect();

    let mut histogram = HitHistogram::default();
    for &h in &hits {
        histogram.record(h);
    }

    let cost = prizes.stake * Decimal::from(batch.len() as u64);
    let gross: Decimal = histogram
        .iter()
        .map(|(h, count)| prizes.prize_for(h) * Decimal::from(count))
        .sum();
    let net = gross - cost;

    log::debug!(
        "scored {} tickets against {}: {} prized, net {}",
        batch.len(),
        result,
        histogram.total(),
        net
    );

    ScoreSummary {
        hits,
        histogram,
        cost,
        gross,
        net,
        scored: true,
    }
}

/// Scores against raw drawn numbers. Anything that is not exactly 15
/// distinct numbers in range yields the zeroed summary instead of partial
/// statistics.
pub fn score_numbers(batch: &TicketBatch, numbers: &[u8], prizes: &PrizeTable) -> ScoreSummary {
    match DrawResult::new(numbers) {
        Ok(result) => score(batch, &result, prizes),
        Err(e) => {
            log::debug!("result not scored: {}", e);
            ScoreSummary::zeroed(batch.len(), prizes.stake)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_from_numbers;

    fn range(lo: u8, hi: u8) -> Vec<u8> {
        (lo..=hi).collect()
    }

    #[test]
    fn test_hit_count() {
        let batch = generate_from_numbers(&range(1, 19)).unwrap();
        let result = DrawResult::new(&range(11, 25)).unwrap();
        // ticket 0 is 1..=15
        assert_eq!(hit_count(&batch.tickets()[0], &result), 5);
    }

    #[test]
    fn test_incomplete_result_is_zeroed() {
        let batch = generate_from_numbers(&range(1, 19)).unwrap();
        let prizes = PrizeTable::default();
        let summary = score_numbers(&batch, &range(1, 10), &prizes);
        assert!(!summary.scored);
        assert_eq!(summary.histogram.total(), 0);
        assert_eq!(summary.gross, Decimal::ZERO);
        assert!(summary.hits.iter().all(|&h| h == 0));
    }

    #[test]
    fn test_cost_uses_actual_batch_length() {
        let full = generate_from_numbers(&range(1, 19)).unwrap();
        let short = TicketBatch::new(*full.base(), full.tickets()[..10].to_vec());
        let result = DrawResult::new(&range(1, 15)).unwrap();
        let summary = score(&short, &result, &PrizeTable::default());
        assert_eq!(summary.cost, Decimal::new(3_500, 2));
        assert_eq!(summary.hits.len(), 10);
    }

    #[test]
    fn test_zero_prizes_lose_the_stake() {
        let batch = generate_from_numbers(&range(1, 19)).unwrap();
        let result = DrawResult::new(&range(1, 15)).unwrap();
        let prizes = PrizeTable {
            stake: Decimal::new(350, 2),
            hits_11: Decimal::ZERO,
            hits_12: Decimal::ZERO,
            hits_13: Decimal::ZERO,
            hits_14: Decimal::ZERO,
            hits_15: Decimal::ZERO,
        };
        let summary = score(&batch, &result, &prizes);
        assert_eq!(summary.cost, Decimal::new(17_500, 2));
        assert_eq!(summary.gross, Decimal::ZERO);
        assert_eq!(summary.net, Decimal::new(-17_500, 2));
        assert!(!summary.is_profit());
    }

    #[test]
    fn test_break_even_counts_as_profit() {
        let batch = generate_from_numbers(&range(1, 19)).unwrap();
        let result = DrawResult::new(&range(1, 15)).unwrap();
        // draw inside the base: every ticket pays, so a flat table nets zero
        let flat = Decimal::new(2, 0);
        let prizes = PrizeTable {
            stake: flat,
            hits_11: flat,
            hits_12: flat,
            hits_13: flat,
            hits_14: flat,
            hits_15: flat,
        };
        let summary = score(&batch, &result, &prizes);
        assert_eq!(summary.net, Decimal::ZERO);
        assert!(summary.is_profit());
    }
}
