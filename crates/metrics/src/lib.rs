//! `stockdesk-metrics`: derived dashboard metrics.
//!
//! Every function here is a pure function of its input slices: no IO, no
//! hidden state, inputs are never mutated and outputs are freshly allocated.

pub mod engine;
pub mod report;
pub mod snapshot;
pub mod summary;

pub use engine::{
    IncomeExpenseTotals, MetricsEngine, filter_invoices, filter_products, income_expense_totals,
    inventory_value, low_stock_products, monthly_sales_series, sort_records_by_date_desc,
};
pub use report::{MonthlyReport, SalesPoint};
pub use snapshot::Snapshot;
pub use summary::{ChartSlice, DashboardSummary, FinancialSummary, ReportsSummary, StockBar};
