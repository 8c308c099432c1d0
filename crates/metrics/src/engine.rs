//! Metrics engine: dashboard aggregates over record snapshots.
//!
//! The free functions are the engine; `MetricsEngine` binds them to a
//! `Snapshot` for callers that hold one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_accounting::{FinancialRecord, RecordKind};
use stockdesk_invoicing::Invoice;
use stockdesk_products::{CategoryFilter, Product};

use crate::report::{MonthlyReport, SalesPoint};
use crate::snapshot::Snapshot;

/// Products at or below their reorder threshold, in input order.
pub fn low_stock_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.is_low_stock()).cloned().collect()
}

/// `Σ stock * unit_price`. Zero for an empty catalog.
pub fn inventory_value(products: &[Product]) -> Decimal {
    products.iter().map(Product::stock_value).sum()
}

/// Income and expense sums over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeExpenseTotals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl IncomeExpenseTotals {
    pub fn profit(&self) -> Decimal {
        self.income - self.expense
    }

    /// `profit / income * 100`, or zero when there is no income.
    pub fn profit_margin_percent(&self) -> Decimal {
        if self.income > Decimal::ZERO {
            self.profit() / self.income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}

/// Every record counts toward exactly one of the two totals.
pub fn income_expense_totals(records: &[FinancialRecord]) -> IncomeExpenseTotals {
    records
        .iter()
        .fold(IncomeExpenseTotals::default(), |mut totals, record| {
            match record.kind {
                RecordKind::Income => totals.income += record.amount,
                RecordKind::Expense => totals.expense += record.amount,
            }
            totals
        })
}

/// `(month, total_sales)` pairs in the order the reports were supplied.
pub fn monthly_sales_series(reports: &[MonthlyReport]) -> Vec<SalesPoint> {
    reports
        .iter()
        .map(|r| SalesPoint {
            month: r.month.clone(),
            total_sales: r.total_sales,
        })
        .collect()
}

/// Products whose name contains `search` (ignoring case) and whose category
/// passes `category`.
pub fn filter_products(products: &[Product], search: &str, category: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.name_contains(search) && category.matches(&p.category))
        .cloned()
        .collect()
}

/// Invoices whose customer name or invoice number contains `search`, ignoring case.
pub fn filter_invoices(invoices: &[Invoice], search: &str) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|i| i.matches_search(search))
        .cloned()
        .collect()
}

/// Newest first. Records sharing a date keep their input order.
pub fn sort_records_by_date_desc(records: &[FinancialRecord]) -> Vec<FinancialRecord> {
    let mut sorted = records.to_vec();
    // `sort_by` is stable.
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Engine bound to one snapshot.
#[derive(Debug, Clone, Copy)]
pub struct MetricsEngine<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> MetricsEngine<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    pub fn low_stock_products(&self) -> Vec<Product> {
        low_stock_products(&self.snapshot.products)
    }

    pub fn inventory_value(&self) -> Decimal {
        inventory_value(&self.snapshot.products)
    }

    pub fn income_expense_totals(&self) -> IncomeExpenseTotals {
        income_expense_totals(&self.snapshot.records)
    }

    pub fn monthly_sales_series(&self) -> Vec<SalesPoint> {
        monthly_sales_series(&self.snapshot.reports)
    }

    pub fn filter_products(&self, search: &str, category: &CategoryFilter) -> Vec<Product> {
        filter_products(&self.snapshot.products, search, category)
    }

    pub fn filter_invoices(&self, search: &str) -> Vec<Invoice> {
        filter_invoices(&self.snapshot.invoices, search)
    }

    pub fn records_newest_first(&self) -> Vec<FinancialRecord> {
        sort_records_by_date_desc(&self.snapshot.records)
    }
}
