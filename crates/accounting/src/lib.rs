//! Income and expense records.
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod record;

pub use record::{FinancialRecord, NewFinancialRecord, RecordKind};
