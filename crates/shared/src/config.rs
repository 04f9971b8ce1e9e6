use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Closing dimensions: 19 base numbers -> tickets of 15 -> 50 tickets
pub const BASE_SIZE: usize = 19;
pub const TICKET_SIZE: usize = 15;
pub const BATCH_SIZE: usize = 50;
pub const DRAW_SIZE: usize = 15;
pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 25;

// Hit counts that pay a prize
pub const MIN_PRIZE_HITS: u8 = 11;
pub const MAX_PRIZE_HITS: u8 = 15;
pub const PRIZE_TIERS: usize = (MAX_PRIZE_HITS - MIN_PRIZE_HITS + 1) as usize;

// Default prize table, in centavos
pub const DEFAULT_STAKE_CENTS: i64 = 3_50;
pub const DEFAULT_PRIZE_11_CENTS: i64 = 7_00;
pub const DEFAULT_PRIZE_12_CENTS: i64 = 14_00;
pub const DEFAULT_PRIZE_13_CENTS: i64 = 35_00;
pub const DEFAULT_PRIZE_14_CENTS: i64 = 2_360_79;
pub const DEFAULT_PRIZE_15_CENTS: i64 = 3_733_907_79;

// Monte Carlo defaults
pub const DEFAULT_SIM_DRAWS: u32 = 10_000;

/// Unit prize per hit count plus the stake paid per ticket.
///
/// Missing fields in a JSON document fall back to the defaults, so a file
/// holding only `{"15": "1500000.00"}` is a valid table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrizeTable {
    pub stake: Decimal,
    #[serde(rename = "11")]
    pub hits_11: Decimal,
    #[serde(rename = "12")]
    pub hits_12: Decimal,
    #[serde(rename = "13")]
    pub hits_13: Decimal,
    #[serde(rename = "14")]
    pub hits_14: Decimal,
    #[serde(rename = "15")]
    pub hits_15: Decimal,
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self {
            stake: Decimal::new(DEFAULT_STAKE_CENTS, 2),
            hits_11: Decimal::new(DEFAULT_PRIZE_11_CENTS, 2),
            hits_12: Decimal::new(DEFAULT_PRIZE_12_CENTS, 2),
            hits_13: Decimal::new(DEFAULT_PRIZE_13_CENTS, 2),
            hits_14: Decimal::new(DEFAULT_PRIZE_14_CENTS, 2),
            hits_15: Decimal::new(DEFAULT_PRIZE_15_CENTS, 2),
        }
    }
}

impl PrizeTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Unit prize for a ticket with `hits` matches; zero outside 11..=15.
    pub fn prize_for(&self, hits: u8) -> Decimal {
        match hits {
            11 => self.hits_11,
            12 => self.hits_12,
            13 => self.hits_13,
            14 => self.hits_14,
            15 => self.hits_15,
            _ => Decimal::ZERO,
        }
    }

    /// Returns false when `hits` is not a prize tier.
    pub fn set_prize(&mut self, hits: u8, value: Decimal) -> bool {
        let slot = match hits {
            11 => &mut self.hits_11,
            12 => &mut self.hits_12,
            13 => &mut self.hits_13,
            14 => &mut self.hits_14,
            15 => &mut self.hits_15,
            _ => return false,
        };
        *slot = value;
        true
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub n_draws: u32,
    pub seed_start: u64,
    pub seed_stride: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_draws: DEFAULT_SIM_DRAWS,
            seed_start: 0,
            seed_stride: 1,
        }
    }
}

impl SimulationConfig {
    pub fn seed_for(&self, draw: u32) -> u64 {
        self.seed_start
            .wrapping_add((draw as u64).wrapping_mul(self.seed_stride))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = PrizeTable::default();
        assert_eq!(table.stake.to_string(), "3.50");
        assert_eq!(table.prize_for(14).to_string(), "2360.79");
        assert_eq!(table.prize_for(15).to_string(), "3733907.79");
        assert_eq!(table.prize_for(10), Decimal::ZERO);
        assert_eq!(table.prize_for(16), Decimal::ZERO);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let table = PrizeTable::from_json(r#"{"stake": "3.00", "15": 1500000.5}"#).unwrap();
        assert_eq!(table.stake, Decimal::new(300, 2));
        assert_eq!(table.hits_15, Decimal::new(15_000_005, 1));
        assert_eq!(table.hits_11, Decimal::new(DEFAULT_PRIZE_11_CENTS, 2));
    }

    #[test]
    fn test_set_prize_rejects_non_tier() {
        let mut table = PrizeTable::default();
        assert!(table.set_prize(12, Decimal::new(15, 0)));
        assert_eq!(table.prize_for(12), Decimal::new(15, 0));
        assert!(!table.set_prize(10, Decimal::ONE));
    }

    #[test]
    fn test_seed_schedule() {
        let config = SimulationConfig { n_draws: 3, seed_start: 10, seed_stride: 7 };
        assert_eq!(config.seed_for(0), 10);
        assert_eq!(config.seed_for(2), 24);
    }
}
