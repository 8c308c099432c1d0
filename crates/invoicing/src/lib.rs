//! Invoicing records.
//!
//! Invoices carry caller-supplied totals; `InvoiceDraft` is the only place
//! totals are derived, and `Invoice::check_consistency` verifies the
//! arithmetic for invoices that arrive from elsewhere.

pub mod document;
pub mod invoice;

pub use document::{DocumentRow, InvoiceDocument};
pub use invoice::{Invoice, InvoiceDraft, InvoiceItem, format_invoice_number};
