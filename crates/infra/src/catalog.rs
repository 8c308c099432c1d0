//! Mutable record store behind the dashboard.
//!
//! Writes are validated, applied to the repositories and announced through a
//! `NotificationSink`. Readers take a `Snapshot`; the metrics engine only ever
//! sees snapshots, never the live store.

use std::sync::RwLock;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_accounting::{FinancialRecord, NewFinancialRecord};
use stockdesk_core::{DomainError, DomainResult, InvoiceId, ProductId, RecordId};
use stockdesk_invoicing::{Invoice, InvoiceDraft, InvoiceItem, format_invoice_number};
use stockdesk_metrics::{MonthlyReport, Snapshot};
use stockdesk_products::{NewProduct, Product, ProductUpdate};

use crate::notification::{Notification, NotificationSink, TracingNotificationSink};
use crate::repository::{InMemoryRepository, Repository};

/// One requested invoice line: which product, how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Command: create an invoice from catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_name: String,
    pub lines: Vec<InvoiceLineRequest>,
    pub occurred_at: DateTime<Utc>,
}

type ProductRepo = InMemoryRepository<Product>;
type InvoiceRepo = InMemoryRepository<Invoice>;
type RecordRepo = InMemoryRepository<FinancialRecord>;

/// Products, invoices, financial records and monthly reports.
///
/// Consistency rules:
/// - invoice numbers are unique,
/// - invoice lines reference existing products (name and price are copied
///   at creation time),
/// - a product referenced by an invoice cannot be deleted.
///
/// Writes are serialized by `gate`; `snapshot` holds it for reading so it
/// never sees half of a multi-repository write.
#[derive(Debug)]
pub struct Catalog<S = TracingNotificationSink, P = ProductRepo, I = InvoiceRepo, R = RecordRepo>
where
    S: NotificationSink,
    P: Repository<Product>,
    I: Repository<Invoice>,
    R: Repository<FinancialRecord>,
{
    products: P,
    invoices: I,
    records: R,
    reports: RwLock<Vec<MonthlyReport>>,
    tax_rate: Decimal,
    sink: S,
    gate: RwLock<()>,
}

impl Catalog {
    /// Empty catalog logging notifications through tracing.
    pub fn new(tax_rate: Decimal) -> Self {
        Self::with_sink(tax_rate, TracingNotificationSink)
    }
}

impl<S: NotificationSink> Catalog<S> {
    pub fn with_sink(tax_rate: Decimal, sink: S) -> Self {
        Self::with_repositories(
            tax_rate,
            sink,
            InMemoryRepository::new(),
            InMemoryRepository::new(),
            InMemoryRepository::new(),
        )
    }

    /// Load a snapshot into a fresh in-memory catalog.
    ///
    /// Every invoice must be internally consistent, reference known products
    /// and carry a unique number.
    pub fn from_snapshot(snapshot: Snapshot, tax_rate: Decimal, sink: S) -> DomainResult<Self> {
        let Snapshot {
            products,
            invoices,
            records,
            reports,
        } = snapshot;

        for (index, invoice) in invoices.iter().enumerate() {
            invoice.check_consistency()?;
            if invoices[..index]
                .iter()
                .any(|other| other.invoice_number == invoice.invoice_number)
            {
                return Err(DomainError::conflict(format!(
                    "duplicate invoice number {}",
                    invoice.invoice_number
                )));
            }
            if let Some(item) = invoice
                .items
                .iter()
                .find(|item| !products.iter().any(|p| p.id == item.product_id))
            {
                return Err(DomainError::invariant(format!(
                    "invoice {} references unknown product {}",
                    invoice.invoice_number, item.product_id
                )));
            }
        }

        tracing::debug!(
            products = products.len(),
            invoices = invoices.len(),
            records = records.len(),
            reports = reports.len(),
            "catalog loaded from snapshot"
        );

        let catalog = Self::with_repositories(
            tax_rate,
            sink,
            InMemoryRepository::with_records(products),
            InMemoryRepository::with_records(invoices),
            InMemoryRepository::with_records(records),
        );
        if let Ok(mut stored) = catalog.reports.write() {
            *stored = reports;
        }
        Ok(catalog)
    }
}

impl<S, P, I, R> Catalog<S, P, I, R>
where
    S: NotificationSink,
    P: Repository<Product>,
    I: Repository<Invoice>,
    R: Repository<FinancialRecord>,
{
    /// Catalog over caller-provided repositories.
    pub fn with_repositories(tax_rate: Decimal, sink: S, products: P, invoices: I, records: R) -> Self {
        Self {
            products,
            invoices,
            records,
            reports: RwLock::new(Vec::new()),
            tax_rate,
            sink,
            gate: RwLock::new(()),
        }
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Consistent copy of every collection.
    pub fn snapshot(&self) -> Snapshot {
        let _read = self.gate.read();
        Snapshot::new(
            self.products.list(),
            self.invoices.list(),
            self.records.list(),
            self.reports.read().map(|r| r.clone()).unwrap_or_default(),
        )
    }

    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id)
    }

    pub fn invoice(&self, id: InvoiceId) -> Option<Invoice> {
        self.invoices.get(&id)
    }

    pub fn record(&self, id: RecordId) -> Option<FinancialRecord> {
        self.records.get(&id)
    }

    pub fn add_product(&self, input: NewProduct, occurred_at: DateTime<Utc>) -> DomainResult<Product> {
        let _write = self.gate.write();
        let product = input.into_product(ProductId::new(), occurred_at)?;
        self.products.upsert(product.clone());

        tracing::info!(product_id = %product.id, name = %product.name, "product added");
        self.sink.notify(Notification::info(
            "Product Added",
            format!("{} has been added to inventory.", product.name),
        ));
        Ok(product)
    }

    pub fn update_product(&self, id: ProductId, update: ProductUpdate) -> DomainResult<Product> {
        let _write = self.gate.write();
        let current = self
            .products
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let updated = update.apply_to(&current)?;
        self.products.upsert(updated.clone());

        tracing::info!(product_id = %id, "product updated");
        self.sink.notify(Notification::info(
            "Product Updated",
            format!("{} has been updated.", updated.name),
        ));
        Ok(updated)
    }

    /// Refused while any invoice still references the product.
    pub fn delete_product(&self, id: ProductId) -> DomainResult<Product> {
        let _write = self.gate.write();
        if self.products.get(&id).is_none() {
            return Err(DomainError::not_found(format!("product {id}")));
        }
        if let Some(invoice) = self.invoices.list().iter().find(|i| i.references_product(id)) {
            return Err(DomainError::conflict(format!(
                "product {id} is referenced by invoice {}",
                invoice.invoice_number
            )));
        }

        let removed = self
            .products
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;

        tracing::info!(product_id = %id, "product deleted");
        self.sink.notify(Notification::destructive(
            "Product Deleted",
            format!("{} has been removed from inventory.", removed.name),
        ));
        Ok(removed)
    }

    /// Create an invoice priced from the current catalog at the configured tax rate.
    ///
    /// Numbers follow `INV-<year>-<seq>`, one past the highest sequence already
    /// issued for that year.
    pub fn create_invoice(&self, input: NewInvoice) -> DomainResult<Invoice> {
        let _write = self.gate.write();

        if input.lines.is_empty() {
            return Err(DomainError::validation("invoice must have at least one item"));
        }

        let mut draft = InvoiceDraft::new(input.customer_name, self.tax_rate);
        for line in &input.lines {
            if line.quantity == 0 {
                return Err(DomainError::validation("quantity must be at least 1"));
            }
            let product = self
                .products
                .get(&line.product_id)
                .ok_or_else(|| DomainError::not_found(format!("product {}", line.product_id)))?;
            draft = draft.with_item(InvoiceItem::new(
                product.id,
                product.name,
                line.quantity,
                product.unit_price,
            ));
        }

        let existing = self.invoices.list();
        let year = input.occurred_at.year();
        let invoice_number = format_invoice_number(year, next_sequence(&existing, year)?);
        if existing.iter().any(|i| i.invoice_number == invoice_number) {
            return Err(DomainError::conflict(format!(
                "invoice number {invoice_number} already exists"
            )));
        }

        let invoice = draft.issue(InvoiceId::new(), invoice_number, input.occurred_at)?;
        self.invoices.upsert(invoice.clone());

        tracing::info!(
            invoice_number = %invoice.invoice_number,
            total = %invoice.total,
            "invoice created"
        );
        self.sink.notify(Notification::info(
            "Invoice Created",
            format!("Invoice {} has been created.", invoice.invoice_number),
        ));
        Ok(invoice)
    }

    pub fn delete_invoice(&self, id: InvoiceId) -> DomainResult<Invoice> {
        let _write = self.gate.write();
        let removed = self
            .invoices
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("invoice {id}")))?;

        tracing::info!(invoice_number = %removed.invoice_number, "invoice deleted");
        self.sink.notify(Notification::destructive(
            "Invoice Deleted",
            format!("Invoice {} has been deleted.", removed.invoice_number),
        ));
        Ok(removed)
    }

    pub fn add_record(&self, input: NewFinancialRecord) -> DomainResult<FinancialRecord> {
        let _write = self.gate.write();
        let record = input.into_record(RecordId::new())?;
        self.records.upsert(record.clone());

        tracing::info!(record_id = %record.id, kind = %record.kind, amount = %record.amount, "record added");
        self.sink.notify(Notification::info(
            "Transaction Added",
            format!("New {} record has been added.", record.kind),
        ));
        Ok(record)
    }

    pub fn delete_record(&self, id: RecordId) -> DomainResult<FinancialRecord> {
        let _write = self.gate.write();
        let removed = self
            .records
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("record {id}")))?;

        tracing::info!(record_id = %id, "record deleted");
        self.sink.notify(Notification::destructive(
            "Transaction Deleted",
            format!("{} has been removed.", removed.description),
        ));
        Ok(removed)
    }

    /// Append a month to the reports list (caller order is kept).
    pub fn record_report(&self, report: MonthlyReport) -> DomainResult<()> {
        let _write = self.gate.write();
        if report.month.trim().is_empty() {
            return Err(DomainError::validation("report month cannot be empty"));
        }
        let mut reports = self
            .reports
            .write()
            .map_err(|_| DomainError::invariant("reports lock poisoned"))?;
        if reports
            .iter()
            .any(|r| r.year == report.year && r.month == report.month)
        {
            return Err(DomainError::conflict(format!(
                "report for {} {} already exists",
                report.month, report.year
            )));
        }

        tracing::info!(month = %report.month, year = report.year, "monthly report recorded");
        reports.push(report);
        Ok(())
    }
}

/// Highest `INV-<year>-<n>` sequence plus one.
fn next_sequence(invoices: &[Invoice], year: i32) -> DomainResult<u32> {
    let prefix = format!("INV-{year}-");
    let highest = invoices
        .iter()
        .filter_map(|i| i.invoice_number.strip_prefix(&prefix))
        .filter_map(|seq| seq.parse::<u32>().ok())
        .max();

    match highest {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or_else(|| {
            DomainError::conflict(format!("invoice sequence for {year} is exhausted"))
        }),
    }
}
