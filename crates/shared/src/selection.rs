use std::fmt;

use crate::config::{BASE_SIZE, DRAW_SIZE, MAX_NUMBER, MIN_NUMBER};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("expected {expected} distinct numbers, found {found}")]
    InvalidInputSize { expected: usize, found: usize },
    #[error("number {0} is outside 1..=25")]
    NumberOutOfRange(u8),
}

/// Validates `numbers` as exactly `N` distinct values in 1..=25 and returns
/// them sorted ascending.
///
/// A list of the right length holding a repeated value is reported with the
/// distinct count it actually has.
fn validated<const N: usize>(numbers: &[u8]) -> Result<[u8; N], SelectionError> {
    if let Some(&n) = numbers.iter().find(|&&n| !(MIN_NUMBER..=MAX_NUMBER).contains(&n)) {
        return Err(SelectionError::NumberOutOfRange(n));
    }
    if numbers.len() != N {
        return Err(SelectionError::InvalidInputSize {
            expected: N,
            found: numbers.len(),
        });
    }

    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != N {
        return Err(SelectionError::InvalidInputSize {
            expected: N,
            found: sorted.len(),
        });
    }

    let mut out = [0u8; N];
    out.copy_from_slice(&sorted);
    Ok(out)
}

pub(crate) fn write_numbers(f: &mut fmt::Formatter<'_>, numbers: &[u8]) -> fmt::Result {
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:02}", n)?;
    }
    Ok(())
}

/// The 19 numbers the player reduces the game to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseSelection {
    numbers: [u8; BASE_SIZE],
}

impl BaseSelection {
    pub fn new(numbers: &[u8]) -> Result<Self, SelectionError> {
        Ok(Self {
            numbers: validated(numbers)?,
        })
    }

    /// Sorted ascending.
    pub fn numbers(&self) -> &[u8; BASE_SIZE] {
        &self.numbers
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.binary_search(&n).is_ok()
    }
}

impl fmt::Display for BaseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_numbers(f, &self.numbers)
    }
}

/// The 15 numbers of an official (or hand-entered) draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawResult {
    numbers: [u8; DRAW_SIZE],
}

impl DrawResult {
    pub fn new(numbers: &[u8]) -> Result<Self, SelectionError> {
        Ok(Self {
            numbers: validated(numbers)?,
        })
    }

    /// Sorted ascending.
    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.numbers
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.binary_search(&n).is_ok()
    }

    /// True when every drawn number is one of the base numbers.
    pub fn is_inside(&self, base: &BaseSelection) -> bool {
        self.numbers.iter().all(|&n| base.contains(n))
    }
}

impl fmt::Display for DrawResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_numbers(f, &self.numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: u8, hi: u8) -> Vec<u8> {
        (lo..=hi).collect()
    }

    #[test]
    fn test_base_sorted_on_construction() {
        let mut numbers = range(1, 19);
        numbers.reverse();
        let base = BaseSelection::new(&numbers).unwrap();
        assert_eq!(base.numbers().to_vec(), range(1, 19));
    }

    #[test]
    fn test_base_size_rejected() {
        assert_eq!(
            BaseSelection::new(&range(1, 18)),
            Err(SelectionError::InvalidInputSize { expected: 19, found: 18 })
        );
        assert_eq!(
            BaseSelection::new(&range(1, 20)),
            Err(SelectionError::InvalidInputSize { expected: 19, found: 20 })
        );
    }

    #[test]
    fn test_duplicate_counts_as_size_error() {
        let mut numbers = range(1, 18);
        numbers.push(7);
        assert_eq!(
            BaseSelection::new(&numbers),
            Err(SelectionError::InvalidInputSize { expected: 19, found: 18 })
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut numbers = range(1, 18);
        numbers.push(26);
        assert_eq!(BaseSelection::new(&numbers), Err(SelectionError::NumberOutOfRange(26)));

        let mut numbers = range(1, 14);
        numbers.push(0);
        assert_eq!(DrawResult::new(&numbers), Err(SelectionError::NumberOutOfRange(0)));
    }

    #[test]
    fn test_draw_inside_base() {
        let base = BaseSelection::new(&range(1, 19)).unwrap();
        assert!(DrawResult::new(&range(1, 15)).unwrap().is_inside(&base));
        assert!(!DrawResult::new(&range(11, 25)).unwrap().is_inside(&base));
    }

    #[test]
    fn test_display_pads() {
        let draw = DrawResult::new(&range(1, 15)).unwrap();
        assert!(draw.to_string().starts_with("01 02 03"));
        assert!(draw.to_string().ends_with("14 15"));
    }
}
