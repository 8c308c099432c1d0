//! `stockdesk` command-line front end.
//!
//! `run` turns a parsed command plus a snapshot into the text printed on
//! stdout. The binary only wires settings, logging and the catalog around it.

pub mod args;
pub mod views;

use serde::Serialize;

use stockdesk_core::DomainError;
use stockdesk_infra::Settings;
use stockdesk_invoicing::InvoiceDocument;
use stockdesk_metrics::Snapshot;

pub use args::{Cli, Command, InvoicesArgs, ProductsArgs};

/// JSON when `json` is set, otherwise the table rendering.
fn render<T, F>(json: bool, value: &T, table: F) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(table(value))
    }
}

/// Render `command` against `snapshot`.
pub fn run(command: &Command, json: bool, settings: &Settings, snapshot: &Snapshot) -> anyhow::Result<String> {
    let engine = snapshot.metrics();
    let symbol = settings.currency_symbol();

    tracing::debug!(?command, json, "rendering view");

    match command {
        Command::Dashboard => render(json, &engine.dashboard(), |s| views::dashboard(s, symbol)),
        Command::Products(args) => render(
            json,
            &engine.filter_products(&args.search, &args.category),
            |products| views::products_table(products, symbol).to_string(),
        ),
        Command::LowStock => render(json, &engine.low_stock_products(), |products| {
            views::products_table(products, symbol).to_string()
        }),
        Command::Invoices(args) => render(json, &engine.filter_invoices(&args.search), |invoices| {
            views::invoices_table(invoices, symbol).to_string()
        }),
        Command::Invoice { number } => {
            let invoice = snapshot
                .invoice_by_number(number)
                .ok_or_else(|| DomainError::not_found(format!("invoice {number}")))?;
            let document = InvoiceDocument::from_invoice(invoice, symbol);
            render(json, &document, views::invoice_document)
        }
        Command::Financial => render(json, &engine.financial(), |s| views::financial(s, symbol)),
        Command::Reports => render(json, &engine.reports(), |s| views::reports(s, symbol)),
        Command::Settings => render(json, settings, views::settings),
    }
}
