use serde::{Deserialize, Serialize};

use stockdesk_accounting::FinancialRecord;
use stockdesk_invoicing::Invoice;
use stockdesk_products::Product;

use crate::engine::MetricsEngine;
use crate::report::MonthlyReport;

/// Read-only view of every collection at one point in time.
///
/// Built explicitly (seed data, the catalog store, or a test) and passed to
/// the engine; nothing reads process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub invoices: Vec<Invoice>,
    pub records: Vec<FinancialRecord>,
    pub reports: Vec<MonthlyReport>,
}

impl Snapshot {
    pub fn new(
        products: Vec<Product>,
        invoices: Vec<Invoice>,
        records: Vec<FinancialRecord>,
        reports: Vec<MonthlyReport>,
    ) -> Self {
        Self {
            products,
            invoices,
            records,
            reports,
        }
    }

    pub fn metrics(&self) -> MetricsEngine<'_> {
        MetricsEngine::new(self)
    }

    pub fn invoice_by_number(&self, invoice_number: &str) -> Option<&Invoice> {
        self.invoices
            .iter()
            .find(|i| i.invoice_number.eq_ignore_ascii_case(invoice_number))
    }
}
