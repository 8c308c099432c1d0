use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Month-level rollup as supplied by the caller (not derived here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Display label, e.g. `"March"`.
    pub month: String,
    pub year: i32,
    pub total_sales: Decimal,
    pub total_products: u32,
    pub low_stock_items: u32,
    pub inventory_value: Decimal,
}

/// One point of the sales trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub month: String,
    pub total_sales: Decimal,
}
