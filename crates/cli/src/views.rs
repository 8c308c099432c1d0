//! Table renderings of the metrics summaries.

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use rust_decimal::Decimal;

use stockdesk_accounting::FinancialRecord;
use stockdesk_core::format_amount;
use stockdesk_infra::Settings;
use stockdesk_invoicing::{Invoice, InvoiceDocument};
use stockdesk_metrics::{DashboardSummary, FinancialSummary, ReportsSummary};
use stockdesk_products::Product;

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn right(text: impl ToString) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Two-column label/value table.
fn key_values(rows: Vec<(&str, String)>) -> Table {
    let mut table = table(&["Metric", "Value"]);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), right(value)]);
    }
    table
}

pub fn products_table(products: &[Product], symbol: &str) -> Table {
    let mut table = table(&["Product", "Category", "Stock", "Min Stock", "Unit Price", "Status"]);
    for product in products {
        let status = if product.is_low_stock() { "Low Stock" } else { "In Stock" };
        table.add_row(vec![
            Cell::new(&product.name),
            Cell::new(&product.category),
            right(product.stock),
            right(product.min_stock),
            right(format_amount(product.unit_price, symbol)),
            Cell::new(status),
        ]);
    }
    table
}

pub fn invoices_table(invoices: &[Invoice], symbol: &str) -> Table {
    let mut table = table(&["Invoice", "Customer", "Items", "Total", "Date"]);
    for invoice in invoices {
        table.add_row(vec![
            Cell::new(&invoice.invoice_number),
            Cell::new(&invoice.customer_name),
            right(invoice.item_count()),
            right(format_amount(invoice.total, symbol)),
            Cell::new(short_date(&invoice.created_at)),
        ]);
    }
    table
}

pub fn records_table(records: &[FinancialRecord], symbol: &str) -> Table {
    let mut table = table(&["Date", "Description", "Category", "Type", "Amount"]);
    for record in records {
        table.add_row(vec![
            Cell::new(short_date(&record.date)),
            Cell::new(&record.description),
            Cell::new(&record.category),
            Cell::new(record.kind),
            right(format_amount(record.signed_amount(), symbol)),
        ]);
    }
    table
}

pub fn dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let headline = key_values(vec![
        ("Total Products", summary.total_products.to_string()),
        ("Total Invoices", summary.total_invoices.to_string()),
        ("Monthly Sales", format_amount(summary.monthly_sales, symbol)),
        ("Inventory Value", format_amount(summary.inventory_value, symbol)),
        ("Low Stock Items", summary.low_stock_count().to_string()),
    ]);

    let mut stock = table(&["Product", "Stock"]);
    for bar in &summary.stock_chart {
        stock.add_row(vec![Cell::new(&bar.label), right(bar.stock)]);
    }

    let mut out = format!("{headline}\n\nStock Levels\n{stock}");
    if !summary.low_stock.is_empty() {
        out.push_str(&format!(
            "\n\nLow Stock Alerts\n{}",
            products_table(&summary.low_stock, symbol)
        ));
    }
    out
}

pub fn financial(summary: &FinancialSummary, symbol: &str) -> String {
    let headline = key_values(vec![
        ("Total Income", format_amount(summary.totals.income, symbol)),
        ("Total Expenses", format_amount(summary.totals.expense, symbol)),
        ("Net Profit", format_amount(summary.profit, symbol)),
        ("Profit Margin", format!("{}%", summary.profit_margin_percent.round_dp(1))),
        ("Income Transactions", summary.income_count.to_string()),
        ("Expense Transactions", summary.expense_count.to_string()),
    ]);
    format!(
        "{headline}\n\nTransactions\n{}",
        records_table(&summary.records, symbol)
    )
}

pub fn reports(summary: &ReportsSummary, symbol: &str) -> String {
    let mut sales = table(&["Month", "Total Sales"]);
    for point in &summary.sales_series {
        sales.add_row(vec![
            Cell::new(&point.month),
            right(format_amount(point.total_sales, symbol)),
        ]);
    }

    let headline = key_values(vec![
        (
            "Average Monthly Sales",
            format_amount(summary.average_monthly_sales.round_dp(2), symbol),
        ),
        ("Inventory Value", format_amount(summary.inventory_value, symbol)),
        ("Low Stock Items", summary.low_stock.len().to_string()),
    ]);

    format!("Monthly Sales\n{sales}\n\n{headline}")
}

pub fn invoice_document(document: &InvoiceDocument) -> String {
    let mut lines = table(&document.header.iter().map(String::as_str).collect::<Vec<_>>());
    for row in &document.rows {
        lines.add_row(vec![
            Cell::new(&row.product),
            right(&row.quantity),
            right(&row.unit_price),
            right(&row.total),
        ]);
    }

    let mut out = format!("{}\n", document.title);
    for (label, value) in &document.metadata {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out.push_str(&format!("\n{lines}\n"));
    for (label, value) in &document.totals {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out.push_str(&format!("\nSave as: {}", document.file_name));
    out
}

pub fn settings(settings: &Settings) -> String {
    let percent = (settings.tax_rate * Decimal::ONE_HUNDRED).normalize();
    key_values(vec![
        ("Company", settings.company_name.clone()),
        ("Contact Email", settings.contact_email.clone().unwrap_or_else(|| "-".to_string())),
        ("Currency", format!("{} ({})", settings.currency, settings.currency_symbol())),
        ("Tax Rate", format!("{percent}%")),
        (
            "Analytics",
            settings
                .analytics_tracking_id
                .as_ref()
                .map_or_else(|| "Not connected".to_string(), |id| format!("Connected ({id})")),
        ),
    ])
    .to_string()
}
