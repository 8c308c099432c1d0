//! Per-screen rollups built on the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_accounting::FinancialRecord;
use stockdesk_products::Product;

use crate::engine::{IncomeExpenseTotals, MetricsEngine};
use crate::report::SalesPoint;

/// Longest product name shown on a chart axis before it is shortened.
pub const CHART_LABEL_MAX_CHARS: usize = 15;

/// One bar of the stock-level chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBar {
    pub label: String,
    pub stock: u32,
}

/// One slice of the income/expense chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: Decimal,
}

/// Headline numbers for the landing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub total_invoices: usize,
    /// Sum of all income records.
    pub monthly_sales: Decimal,
    pub inventory_value: Decimal,
    pub low_stock: Vec<Product>,
    pub stock_chart: Vec<StockBar>,
}

impl DashboardSummary {
    pub fn low_stock_count(&self) -> usize {
        self.low_stock.len()
    }
}

/// Income/expense overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub totals: IncomeExpenseTotals,
    pub profit: Decimal,
    pub profit_margin_percent: Decimal,
    pub income_count: usize,
    pub expense_count: usize,
    pub records: Vec<FinancialRecord>,
    pub chart: Vec<ChartSlice>,
}

/// Trend + stock health overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsSummary {
    pub sales_series: Vec<SalesPoint>,
    /// Mean of `total_sales` across reports; zero when there are none.
    pub average_monthly_sales: Decimal,
    pub inventory_value: Decimal,
    pub low_stock: Vec<Product>,
}

/// Shorten long names to `CHART_LABEL_MAX_CHARS` characters plus `...`.
pub fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_MAX_CHARS {
        let head: String = name.chars().take(CHART_LABEL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

impl MetricsEngine<'_> {
    pub fn dashboard(&self) -> DashboardSummary {
        let snapshot = self.snapshot();
        DashboardSummary {
            total_products: snapshot.products.len(),
            total_invoices: snapshot.invoices.len(),
            monthly_sales: self.income_expense_totals().income,
            inventory_value: self.inventory_value(),
            low_stock: self.low_stock_products(),
            stock_chart: snapshot
                .products
                .iter()
                .map(|p| StockBar {
                    label: chart_label(&p.name),
                    stock: p.stock,
                })
                .collect(),
        }
    }

    pub fn financial(&self) -> FinancialSummary {
        let records = &self.snapshot().records;
        let totals = self.income_expense_totals();
        let income_count = records.iter().filter(|r| r.is_income()).count();

        FinancialSummary {
            totals,
            profit: totals.profit(),
            profit_margin_percent: totals.profit_margin_percent(),
            income_count,
            expense_count: records.len() - income_count,
            records: self.records_newest_first(),
            chart: vec![
                ChartSlice {
                    name: "Income".to_string(),
                    value: totals.income,
                },
                ChartSlice {
                    name: "Expense".to_string(),
                    value: totals.expense,
                },
            ],
        }
    }

    pub fn reports(&self) -> ReportsSummary {
        let reports = &self.snapshot().reports;
        let average_monthly_sales = if reports.is_empty() {
            Decimal::ZERO
        } else {
            reports.iter().map(|r| r.total_sales).sum::<Decimal>() / Decimal::from(reports.len())
        };

        ReportsSummary {
            sales_series: self.monthly_sales_series(),
            average_monthly_sales,
            inventory_value: self.inventory_value(),
            low_stock: self.low_stock_products(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MonthlyReport;
    use crate::snapshot::Snapshot;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use stockdesk_accounting::RecordKind;
    use stockdesk_core::{ProductId, RecordId};

    fn product(name: &str, stock: u32, min_stock: u32) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            category: "Electronics".to_string(),
            stock,
            min_stock,
            unit_price: dec!(10),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        }
    }

    fn record(kind: RecordKind, amount: Decimal, d: u32) -> FinancialRecord {
        FinancialRecord {
            id: RecordId::new(),
            kind,
            description: format!("{kind} on {d}"),
            amount,
            category: "General".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap(),
        }
    }

    fn report(month: &str, total_sales: Decimal) -> MonthlyReport {
        MonthlyReport {
            month: month.to_string(),
            year: 2024,
            total_sales,
            total_products: 5,
            low_stock_items: 1,
            inventory_value: dec!(1000),
        }
    }

    #[test]
    fn chart_labels_are_shortened_past_fifteen_chars() {
        assert_eq!(chart_label("Wireless Mouse"), "Wireless Mouse");
        assert_eq!(chart_label("Ergonomic Keyboard"), "Ergonomic Keybo...");
        assert_eq!(chart_label("Exactly15 chars"), "Exactly15 chars");
    }

    #[test]
    fn dashboard_counts_and_charts() {
        let snapshot = Snapshot {
            products: vec![product("Wireless Mouse", 150, 20), product("USB-C Cable", 8, 15)],
            records: vec![
                record(RecordKind::Income, dec!(100), 2),
                record(RecordKind::Expense, dec!(30), 3),
                record(RecordKind::Income, dec!(50), 4),
            ],
            ..Snapshot::default()
        };

        let dashboard = snapshot.metrics().dashboard();
        assert_eq!(dashboard.total_products, 2);
        assert_eq!(dashboard.total_invoices, 0);
        assert_eq!(dashboard.monthly_sales, dec!(150));
        assert_eq!(dashboard.inventory_value, dec!(1580));
        assert_eq!(dashboard.low_stock_count(), 1);
        assert_eq!(dashboard.stock_chart[1], StockBar { label: "USB-C Cable".to_string(), stock: 8 });
    }

    #[test]
    fn financial_summary_counts_and_orders_records() {
        let snapshot = Snapshot {
            records: vec![
                record(RecordKind::Expense, dec!(30), 3),
                record(RecordKind::Income, dec!(120), 9),
                record(RecordKind::Expense, dec!(30), 1),
            ],
            ..Snapshot::default()
        };

        let financial = snapshot.metrics().financial();
        assert_eq!(financial.income_count, 1);
        assert_eq!(financial.expense_count, 2);
        assert_eq!(financial.profit, dec!(60));
        assert_eq!(financial.profit_margin_percent, dec!(50));
        assert_eq!(financial.records[0].amount, dec!(120));
        assert_eq!(financial.chart[1].value, dec!(60));
    }

    #[test]
    fn reports_average_handles_empty_and_populated() {
        let empty = Snapshot::default();
        assert_eq!(empty.metrics().reports().average_monthly_sales, Decimal::ZERO);

        let snapshot = Snapshot {
            reports: vec![report("March", dec!(300)), report("February", dec!(100))],
            ..Snapshot::default()
        };
        let reports = snapshot.metrics().reports();
        assert_eq!(reports.average_monthly_sales, dec!(200));
        assert_eq!(reports.sales_series[0].month, "March");
    }
}
