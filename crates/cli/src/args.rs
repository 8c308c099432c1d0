//! Command-line surface.

use clap::{Args, Parser, Subcommand};

use stockdesk_observability::LogFormat;
use stockdesk_products::CategoryFilter;

/// Inventory, invoicing and bookkeeping dashboard for small businesses.
#[derive(Debug, Parser)]
#[command(name = "stockdesk", author, version, about, long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log output format (overrides STOCKDESK_LOG_FORMAT).
    #[arg(long, global = true, value_name = "json|pretty")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Headline numbers, low-stock alerts and stock levels.
    Dashboard,
    /// List products, optionally filtered.
    Products(ProductsArgs),
    /// Products at or below their minimum stock.
    LowStock,
    /// List invoices, optionally filtered.
    Invoices(InvoicesArgs),
    /// Show one invoice as a printable document.
    Invoice {
        /// Invoice number, e.g. INV-2024-001.
        number: String,
    },
    /// Income, expenses and profit.
    Financial,
    /// Monthly sales trend and stock health.
    Reports,
    /// Effective settings.
    Settings,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProductsArgs {
    /// Case-insensitive substring of the product name.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Exact category name, or "All".
    #[arg(long, default_value = CategoryFilter::ALL_LABEL)]
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InvoicesArgs {
    /// Case-insensitive substring of the customer name or invoice number.
    #[arg(long, default_value = "")]
    pub search: String,
}
