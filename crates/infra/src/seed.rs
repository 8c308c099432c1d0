//! Demo dataset.
//!
//! Built as an explicit `Snapshot` value; callers decide whether to load it
//! into a `Catalog`, hand it straight to the metrics engine, or ignore it.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use stockdesk_accounting::{FinancialRecord, RecordKind};
use stockdesk_core::{InvoiceId, ProductId, RecordId};
use stockdesk_invoicing::{Invoice, InvoiceItem};
use stockdesk_metrics::{MonthlyReport, Snapshot};
use stockdesk_products::Product;

/// Categories offered by the product form, in display order.
pub const PRODUCT_CATEGORIES: [&str; 3] = ["Electronics", "Furniture", "Stationery"];

/// Income categories offered by the transaction form.
pub const INCOME_CATEGORIES: [&str; 3] = ["Sales", "Services", "Other Income"];

/// Expense categories offered by the transaction form.
pub const EXPENSE_CATEGORIES: [&str; 5] = ["Rent", "Utilities", "Inventory", "Salaries", "Other Expense"];

/// Rate every seed invoice was issued at (10%).
fn seed_tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Amount from hundredths, e.g. `money(2999)` is `29.99`.
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn product(
    id: u128,
    name: &str,
    category: &str,
    stock: u32,
    min_stock: u32,
    unit_price: Decimal,
    created_at: DateTime<Utc>,
) -> Product {
    Product {
        id: ProductId::from_u128(id),
        name: name.to_string(),
        category: category.to_string(),
        stock,
        min_stock,
        unit_price,
        created_at,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, "Wireless Mouse", "Electronics", 150, 20, money(2999), date(2024, 1, 15)),
        product(2, "USB-C Cable", "Electronics", 8, 15, money(1299), date(2024, 1, 20)),
        product(3, "Office Chair", "Furniture", 45, 10, money(19999), date(2024, 2, 1)),
        product(4, "Notebook A4", "Stationery", 5, 25, money(499), date(2024, 2, 10)),
        product(5, "Desk Lamp", "Electronics", 32, 10, money(3499), date(2024, 2, 15)),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: InvoiceId::from_u128(1),
            invoice_number: "INV-2024-001".to_string(),
            customer_name: "Acme Corporation".to_string(),
            items: vec![
                InvoiceItem::new(ProductId::from_u128(1), "Wireless Mouse", 10, money(2999)),
                InvoiceItem::new(ProductId::from_u128(2), "USB-C Cable", 20, money(1299)),
            ],
            subtotal: money(55970),
            tax_rate: seed_tax_rate(),
            tax: money(5597),
            total: money(61567),
            created_at: date(2024, 3, 1),
        },
        Invoice {
            id: InvoiceId::from_u128(2),
            invoice_number: "INV-2024-002".to_string(),
            customer_name: "Tech Solutions Inc".to_string(),
            items: vec![InvoiceItem::new(
                ProductId::from_u128(3),
                "Office Chair",
                5,
                money(19999),
            )],
            subtotal: money(99995),
            tax_rate: seed_tax_rate(),
            tax: money(9999),
            total: money(109994),
            created_at: date(2024, 3, 5),
        },
        Invoice {
            id: InvoiceId::from_u128(3),
            invoice_number: "INV-2024-003".to_string(),
            customer_name: "Global Enterprises".to_string(),
            items: vec![InvoiceItem::new(
                ProductId::from_u128(5),
                "Desk Lamp",
                15,
                money(3499),
            )],
            subtotal: money(52485),
            tax_rate: seed_tax_rate(),
            tax: money(5249),
            total: money(57734),
            created_at: date(2024, 3, 10),
        },
    ]
}

fn record(
    id: u128,
    kind: RecordKind,
    description: &str,
    amount: Decimal,
    category: &str,
    date: DateTime<Utc>,
) -> FinancialRecord {
    FinancialRecord {
        id: RecordId::from_u128(id),
        kind,
        description: description.to_string(),
        amount,
        category: category.to_string(),
        date,
    }
}

pub fn financial_records() -> Vec<FinancialRecord> {
    use RecordKind::{Expense, Income};

    vec![
        record(1, Income, "Product Sales - March", money(1542050), "Sales", date(2024, 3, 15)),
        record(2, Expense, "Office Rent", money(250000), "Rent", date(2024, 3, 1)),
        record(3, Expense, "Inventory Purchase", money(500000), "Inventory", date(2024, 3, 10)),
        record(4, Income, "Bulk Order Payment", money(890000), "Sales", date(2024, 3, 20)),
        record(5, Expense, "Utilities", money(45000), "Utilities", date(2024, 3, 5)),
    ]
}

fn report(
    month: &str,
    total_sales: Decimal,
    total_products: u32,
    low_stock_items: u32,
    inventory_value: Decimal,
) -> MonthlyReport {
    MonthlyReport {
        month: month.to_string(),
        year: 2024,
        total_sales,
        total_products,
        low_stock_items,
        inventory_value,
    }
}

/// Newest month first, as the reports screen lists them.
pub fn monthly_reports() -> Vec<MonthlyReport> {
    vec![
        report("March", money(2432050), 5, 2, money(4568000)),
        report("February", money(1895000), 5, 1, money(4210000)),
        report("January", money(2145075), 4, 0, money(3890000)),
    ]
}

pub fn demo_snapshot() -> Snapshot {
    Snapshot::new(products(), invoices(), financial_records(), monthly_reports())
}
