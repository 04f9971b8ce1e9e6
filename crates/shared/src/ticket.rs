use std::collections::HashSet;
use std::fmt;

use crate::config::TICKET_SIZE;
use crate::selection::{write_numbers, BaseSelection};

/// One 15-number entry, kept in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    numbers: [u8; TICKET_SIZE],
}

impl Ticket {
    pub fn new(mut numbers: [u8; TICKET_SIZE]) -> Self {
        numbers.sort_unstable();
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8; TICKET_SIZE] {
        &self.numbers
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.binary_search(&n).is_ok()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_numbers(f, &self.numbers)
    }
}

/// Tickets generated from one base selection, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBatch {
    base: BaseSelection,
    tickets: Vec<Ticket>,
}

impl TicketBatch {
    pub fn new(base: BaseSelection, tickets: Vec<Ticket>) -> Self {
        Self { base, tickets }
    }

    pub fn base(&self) -> &BaseSelection {
        &self.base
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ticket> {
        self.tickets.iter()
    }

    /// Number of different combinations in the batch.
    pub fn distinct_count(&self) -> usize {
        self.tickets.iter().collect::<HashSet<_>>().len()
    }

    /// How many tickets contain `n`.
    pub fn appearances(&self, n: u8) -> usize {
        self.tickets.iter().filter(|t| t.contains(n)).count()
    }
}

impl<'a> IntoIterator for &'a TicketBatch {
    type Item = &'a Ticket;
    type IntoIter = std::slice::Iter<'a, Ticket>;

    fn into_iter(self) -> Self::IntoIter {
        self.tickets.iter()
    }
}
