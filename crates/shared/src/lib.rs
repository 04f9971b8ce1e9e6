pub mod config;
pub mod money;
pub mod result;
pub mod selection;
pub mod ticket;
pub mod words;

pub use config::PrizeTable;
pub use money::Money;
pub use result::{HitHistogram, ScoreSummary};
pub use selection::{BaseSelection, DrawResult, SelectionError};
pub use ticket::{Ticket, TicketBatch};
