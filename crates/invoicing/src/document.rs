//! Printable invoice layout.
//!
//! This is the data a document formatter (PDF, terminal table) lays out;
//! the rendering itself happens elsewhere.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockdesk_core::format_amount;

use crate::invoice::Invoice;

pub const DOCUMENT_TITLE: &str = "INVOICE";
pub const TABLE_HEADER: [&str; 4] = ["Product", "Quantity", "Unit Price", "Total"];

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRow {
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
    pub total: String,
}

/// Fully formatted invoice layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub title: String,
    /// `(label, value)` pairs printed above the table.
    pub metadata: Vec<(String, String)>,
    pub header: Vec<String>,
    pub rows: Vec<DocumentRow>,
    /// `(label, value)` pairs printed below the table.
    pub totals: Vec<(String, String)>,
    pub file_name: String,
}

impl InvoiceDocument {
    /// Lay out `invoice`. The tax line is labelled with the rate the invoice
    /// was issued at, whatever the current settings say.
    pub fn from_invoice(invoice: &Invoice, currency_symbol: &str) -> Self {
        let money = |amount: Decimal| format_amount(amount, currency_symbol);

        let rows = invoice
            .items
            .iter()
            .map(|item| DocumentRow {
                product: item.product_name.clone(),
                quantity: item.quantity.to_string(),
                unit_price: money(item.unit_price),
                total: money(item.total),
            })
            .collect();

        let tax_percent = (invoice.tax_rate * Decimal::ONE_HUNDRED).normalize();

        Self {
            title: DOCUMENT_TITLE.to_string(),
            metadata: vec![
                ("Invoice Number".to_string(), invoice.invoice_number.clone()),
                ("Customer".to_string(), invoice.customer_name.clone()),
                (
                    "Date".to_string(),
                    invoice.created_at.format("%-m/%-d/%Y").to_string(),
                ),
            ],
            header: TABLE_HEADER.iter().map(|h| h.to_string()).collect(),
            rows,
            totals: vec![
                ("Subtotal".to_string(), money(invoice.subtotal)),
                (format!("Tax ({tax_percent}%)"), money(invoice.tax)),
                ("Total".to_string(), money(invoice.total)),
            ],
            file_name: format!("{}.pdf", invoice.invoice_number),
        }
    }
}
