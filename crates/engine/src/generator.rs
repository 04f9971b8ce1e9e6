use std::sync::OnceLock;

use fechamento_shared::config::{BASE_SIZE, BATCH_SIZE, TICKET_SIZE};
use fechamento_shared::{BaseSelection, SelectionError, Ticket, TicketBatch};

pub type IndexMatrix = [[usize; TICKET_SIZE]; BATCH_SIZE];

/// Positions into the sorted base for every ticket of the batch.
///
/// Row `i` is the window `(i + x) % 19` for `x` in `0..15`, sorted. Rows wrap
/// modulo 19, so row `i` and row `i + 19` are the same window.
pub fn index_matrix() -> &'static IndexMatrix {
    static MATRIX: OnceLock<IndexMatrix> = OnceLock::new();
    MATRIX.get_or_init(build_matrix)
}

fn build_matrix() -> IndexMatrix {
    let mut matrix = [[0usize; TICKET_SIZE]; BATCH_SIZE];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (x, slot) in row.iter_mut().enumerate() {
            *slot = (i + x) % BASE_SIZE;
        }
        row.sort_unstable();
    }
    matrix
}

/// Expands a base selection into the 50-ticket closing.
pub fn generate(base: &BaseSelection) -> TicketBatch {
    let sorted = base.numbers();
    let tickets = index_matrix()
        .iter()
        .map(|row| {
            let mut numbers = [0u8; TICKET_SIZE];
            for (slot, &idx) in numbers.iter_mut().zip(row.iter()) {
                *slot = sorted[idx];
            }
            Ticket::new(numbers)
        })
        .collect();
    log::debug!("generated {} tickets from base {}", BATCH_SIZE, base);
    TicketBatch::new(*base, tickets)
}

/// Validates raw numbers before generating; see [`BaseSelection::new`].
pub fn generate_from_numbers(numbers: &[u8]) -> Result<TicketBatch, SelectionError> {
    let base = BaseSelection::new(numbers)?;
    Ok(generate(&base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_rows() {
        let matrix = index_matrix();
        assert_eq!(matrix[0].to_vec(), (0..15).collect::<Vec<_>>());
        // window 5..20 wraps to {5..18, 0}
        let mut expected: Vec<usize> = (5..19).collect();
        expected.insert(0, 0);
        assert_eq!(matrix[5].to_vec(), expected);
        assert_eq!(matrix[49], matrix[49 - 19]);
        assert_eq!(matrix[49], matrix[11]);
    }

    #[test]
    fn test_matrix_is_shared() {
        assert!(std::ptr::eq(index_matrix(), index_matrix()));
    }

    #[test]
    fn test_rows_omit_four_consecutive_positions() {
        for (i, row) in index_matrix().iter().enumerate() {
            let missing: Vec<usize> = (0..BASE_SIZE).filter(|p| !row.contains(p)).collect();
            let mut expected: Vec<usize> = (15..19).map(|x| (i + x) % BASE_SIZE).collect();
            expected.sort_unstable();
            assert_eq!(missing, expected, "row {}", i);
        }
    }

    #[test]
    fn test_generate_maps_through_sorted_base() {
        let numbers: Vec<u8> = vec![
            25, 3, 7, 1, 9, 11, 13, 15, 17, 19, 21, 23, 2, 4, 6, 8, 10, 12, 14,
        ];
        let batch = generate_from_numbers(&numbers).unwrap();
        let sorted = batch.base().numbers();
        assert_eq!(batch.tickets()[0].numbers()[..], sorted[..15]);
        assert_eq!(batch.tickets()[4].numbers()[..], sorted[4..]);
    }

    #[test]
    fn test_rejects_bad_size() {
        let short: Vec<u8> = (1..=18).collect();
        assert_eq!(
            generate_from_numbers(&short),
            Err(SelectionError::InvalidInputSize { expected: 19, found: 18 })
        );
    }
}
