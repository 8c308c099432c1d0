use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use stockdesk_cli::{Command, InvoicesArgs, ProductsArgs, run};
use stockdesk_infra::{
    Catalog, InMemoryNotificationSink, InvoiceLineRequest, NewInvoice, Settings, seed,
};
use stockdesk_core::ProductId;
use stockdesk_products::CategoryFilter;

fn settings() -> Settings {
    Settings::default()
}

#[test]
fn dashboard_shows_seed_headlines() {
    let out = run(&Command::Dashboard, false, &settings(), &seed::demo_snapshot()).unwrap();

    assert!(out.contains("Total Products"));
    assert!(out.contains("$24,320.50"));
    assert!(out.contains("$14,746.60"));
    assert!(out.contains("Low Stock Alerts"));
    assert!(out.contains("Notebook A4"));
}

#[test]
fn products_json_respects_filters() {
    let command = Command::Products(ProductsArgs {
        search: "desk".to_string(),
        category: CategoryFilter::Only("Electronics".to_string()),
    });
    let out = run(&command, true, &settings(), &seed::demo_snapshot()).unwrap();

    let products: serde_json::Value = serde_json::from_str(&out).unwrap();
    let names: Vec<&str> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Desk Lamp"]);
}

#[test]
fn low_stock_lists_only_products_at_or_below_minimum() {
    let out = run(&Command::LowStock, false, &settings(), &seed::demo_snapshot()).unwrap();

    assert!(out.contains("USB-C Cable"));
    assert!(out.contains("Notebook A4"));
    assert!(!out.contains("Wireless Mouse"));
}

#[test]
fn invoices_search_matches_customer_and_number() {
    let snapshot = seed::demo_snapshot();
    let by_customer = Command::Invoices(InvoicesArgs { search: "acme".to_string() });
    let by_number = Command::Invoices(InvoicesArgs { search: "2024-003".to_string() });

    let out = run(&by_customer, false, &settings(), &snapshot).unwrap();
    assert!(out.contains("INV-2024-001"));
    assert!(!out.contains("INV-2024-002"));

    let out = run(&by_number, false, &settings(), &snapshot).unwrap();
    assert!(out.contains("Global Enterprises"));
}

#[test]
fn invoice_document_renders_totals_and_file_name() {
    let command = Command::Invoice { number: "inv-2024-002".to_string() };
    let out = run(&command, false, &settings(), &seed::demo_snapshot()).unwrap();

    assert!(out.starts_with("INVOICE"));
    assert!(out.contains("Customer: Tech Solutions Inc"));
    assert!(out.contains("Tax (10%): $99.99"));
    assert!(out.contains("Total: $1,099.94"));
    assert!(out.contains("INV-2024-002.pdf"));
}

#[test]
fn invoice_document_keeps_its_issuing_rate_after_settings_change() {
    let mut settings = settings();
    settings.tax_rate = dec!(0.20);
    let seeded = Command::Invoice { number: "INV-2024-001".to_string() };

    let out = run(&seeded, false, &settings, &seed::demo_snapshot()).unwrap();
    assert!(out.contains("Subtotal: $559.70"));
    assert!(out.contains("Tax (10%): $55.97"));
    assert!(!out.contains("Tax (20%)"));

    let catalog = Catalog::from_snapshot(
        seed::demo_snapshot(),
        settings.tax_rate,
        InMemoryNotificationSink::new(),
    )
    .unwrap();
    let issued = catalog
        .create_invoice(NewInvoice {
            customer_name: "Initech".to_string(),
            lines: vec![InvoiceLineRequest { product_id: ProductId::from_u128(5), quantity: 2 }],
            occurred_at: Utc.with_ymd_and_hms(2024, 4, 3, 0, 0, 0).unwrap(),
        })
        .unwrap();
    let command = Command::Invoice { number: issued.invoice_number.clone() };

    let out = run(&command, false, &settings, &catalog.snapshot()).unwrap();
    // 2 * 34.99 = 69.98, 20% = 14.00 (13.996 rounded)
    assert!(out.contains("Tax (20%): $14.00"));
    assert!(out.contains("Total: $83.98"));
}

#[test]
fn unknown_invoice_is_an_error() {
    let command = Command::Invoice { number: "INV-1999-001".to_string() };
    let err = run(&command, false, &settings(), &seed::demo_snapshot()).unwrap_err();
    assert!(err.to_string().contains("INV-1999-001"));
}

#[test]
fn financial_json_reports_profit_and_margin() {
    let out = run(&Command::Financial, true, &settings(), &seed::demo_snapshot()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(summary["profit"], "16370.50");
    assert_eq!(summary["income_count"], 2);
    assert_eq!(summary["expense_count"], 3);
    assert_eq!(summary["records"][0]["description"], "Bulk Order Payment");
}

#[test]
fn reports_list_months_in_stored_order() {
    let out = run(&Command::Reports, false, &settings(), &seed::demo_snapshot()).unwrap();

    let march = out.find("March").unwrap();
    let january = out.find("January").unwrap();
    assert!(march < january);
    assert!(out.contains("Average Monthly Sales"));
}

#[test]
fn settings_view_shows_currency_and_tax() {
    let mut settings = settings();
    settings.connect_analytics("G-TEST").unwrap();
    let out = run(&Command::Settings, false, &settings, &seed::demo_snapshot()).unwrap();

    assert!(out.contains("USD ($)"));
    assert!(out.contains("10%"));
    assert!(out.contains("Connected (G-TEST)"));
}

#[test]
fn views_reflect_catalog_writes() {
    let catalog = Catalog::from_snapshot(
        seed::demo_snapshot(),
        dec!(0.10),
        InMemoryNotificationSink::new(),
    )
    .unwrap();
    let invoice = catalog
        .create_invoice(NewInvoice {
            customer_name: "Umbrella Ltd".to_string(),
            lines: vec![InvoiceLineRequest { product_id: ProductId::from_u128(2), quantity: 3 }],
            occurred_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
        })
        .unwrap();

    let command = Command::Invoices(InvoicesArgs { search: "umbrella".to_string() });
    let out = run(&command, false, &settings(), &catalog.snapshot()).unwrap();
    assert!(out.contains(&invoice.invoice_number));
    assert!(out.contains("4/1/2024"));
}
