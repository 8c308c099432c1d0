//! `stockdesk-core` — shared building blocks for the StockDesk domain crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InvoiceId, ProductId, RecordId};
pub use money::{currency_symbol, format_amount, round_cents};
