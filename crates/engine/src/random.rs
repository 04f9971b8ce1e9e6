use rand::seq::index;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use fechamento_shared::config::{BASE_SIZE, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};
use fechamento_shared::{BaseSelection, DrawResult, SelectionError};

fn sample_numbers(rng: &mut Pcg64, amount: usize) -> Vec<u8> {
    let span = (MAX_NUMBER - MIN_NUMBER + 1) as usize;
    index::sample(rng, span, amount)
        .into_iter()
        .map(|i| MIN_NUMBER + i as u8)
        .collect()
}

/// Uniform random base selection; the same seed always yields the same set.
pub fn random_base(seed: u64) -> Result<BaseSelection, SelectionError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    BaseSelection::new(&sample_numbers(&mut rng, BASE_SIZE))
}

/// Uniform random 15-number draw.
pub fn random_draw(seed: u64) -> Result<DrawResult, SelectionError> {
    let mut rng = Pcg64::seed_from_u64(seed);
    DrawResult::new(&sample_numbers(&mut rng, DRAW_SIZE))
}

/// Fresh seed for callers that did not ask for one.
pub fn fresh_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_base_is_reproducible() {
        let a = random_base(42).unwrap();
        let b = random_base(42).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.numbers().len(), BASE_SIZE);
    }

    #[test]
    fn test_draws_vary_with_seed() {
        let draws: std::collections::HashSet<_> = (0..20).map(|s| random_draw(s).unwrap()).collect();
        assert!(draws.len() > 1);
    }

    #[test]
    fn test_numbers_in_range() {
        for seed in 0..100 {
            let draw = random_draw(seed).unwrap();
            assert!(draw.numbers().iter().all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)));
        }
    }
}
