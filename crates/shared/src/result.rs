use rust_decimal::Decimal;

use crate::config::{MAX_PRIZE_HITS, MIN_PRIZE_HITS, PRIZE_TIERS};
use crate::money::Money;

/// Ticket counts for the prize tiers 11..=15.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitHistogram {
    counts: [u32; PRIZE_TIERS],
}

impl HitHistogram {
    /// Counts a ticket; hit counts outside 11..=15 are ignored.
    pub fn record(&mut self, hits: u8) {
        if (MIN_PRIZE_HITS..=MAX_PRIZE_HITS).contains(&hits) {
            self.counts[(hits - MIN_PRIZE_HITS) as usize] += 1;
        }
    }

    pub fn get(&self, hits: u8) -> u32 {
        if (MIN_PRIZE_HITS..=MAX_PRIZE_HITS).contains(&hits) {
            self.counts[(hits - MIN_PRIZE_HITS) as usize]
        } else {
            0
        }
    }

    /// Tickets that won any prize.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// `(hits, count)` pairs in ascending hit order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        (MIN_PRIZE_HITS..=MAX_PRIZE_HITS).zip(self.counts.iter().copied())
    }

    pub fn merge(&mut self, other: &HitHistogram) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSummary {
    /// Hit count per ticket, in batch order.
    pub hits: Vec<u8>,
    pub histogram: HitHistogram,
    pub cost: Money,
    pub gross: Money,
    pub net: Money,
    /// False when the result was incomplete and nothing was scored.
    pub scored: bool,
}

impl ScoreSummary {
    /// Neutral summary for an incomplete result: no hits, no prize, the
    /// stake is still owed.
    pub fn zeroed(ticket_count: usize, stake: Money) -> Self {
        let cost = stake * Decimal::from(ticket_count as u64);
        Self {
            hits: vec![0; ticket_count],
            histogram: HitHistogram::default(),
            cost,
            gross: Decimal::ZERO,
            net: -cost,
            scored: false,
        }
    }

    /// Zero counts as profit framing.
    pub fn is_profit(&self) -> bool {
        self.net >= Decimal::ZERO
    }

    pub fn prized_tickets(&self) -> u32 {
        self.histogram.total()
    }
}

/// One Monte Carlo draw scored against a batch.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub seed: u64,
    pub histogram: HitHistogram,
    pub gross: Money,
    pub net: Money,
    pub inside_base: bool,
}

#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub outcomes: Vec<DrawOutcome>,
    pub histogram: HitHistogram,
    pub total_cost: Money,
    pub total_gross: Money,
    pub draws_inside_base: u32,
}

impl SimulationReport {
    pub fn from_outcomes(outcomes: Vec<DrawOutcome>, cost_per_draw: Money) -> Self {
        let mut histogram = HitHistogram::default();
        let mut total_gross = Decimal::ZERO;
        let mut draws_inside_base = 0;
        for outcome in &outcomes {
            histogram.merge(&outcome.histogram);
            total_gross += outcome.gross;
            if outcome.inside_base {
                draws_inside_base += 1;
            }
        }
        let total_cost = cost_per_draw * Decimal::from(outcomes.len() as u64);
        Self {
            outcomes,
            histogram,
            total_cost,
            total_gross,
            draws_inside_base,
        }
    }

    pub fn n_draws(&self) -> usize {
        self.outcomes.len()
    }

    pub fn total_net(&self) -> Money {
        self.total_gross - self.total_cost
    }

    pub fn avg_net(&self) -> Money {
        if self.outcomes.is_empty() {
            Decimal::ZERO
        } else {
            self.total_net() / Decimal::from(self.outcomes.len() as u64)
        }
    }

    pub fn best(&self) -> Option<&DrawOutcome> {
        self.outcomes.iter().max_by(|a, b| a.net.cmp(&b.net))
    }

    /// Draws whose net was zero or positive.
    pub fn profitable_draws(&self) -> usize {
        self.outcomes.iter().filter(|o| o.net >= Decimal::ZERO).count()
    }
}
