//! sodu-core: shared domain types for the sodu expense tracker

pub mod category;
pub mod time;
pub mod transaction;

pub use category::Category;
pub use time::{TimeOfDay, is_weekend, parse_timestamp, to_local};
pub use transaction::{Transaction, TransactionKind};
