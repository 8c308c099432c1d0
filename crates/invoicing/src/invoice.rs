use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, InvoiceId, ProductId, round_cents};

/// One invoice line. `product_name` is a snapshot taken when the line was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

impl InvoiceItem {
    /// Build a line whose `total` is `quantity * unit_price`.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
            total: Decimal::from(quantity) * unit_price,
        }
    }

    fn check(&self) -> DomainResult<()> {
        if self.quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        if self.total != Decimal::from(self.quantity) * self.unit_price {
            return Err(DomainError::invariant(format!(
                "line total for {} does not equal quantity * unit price",
                self.product_name
            )));
        }
        Ok(())
    }
}

/// An issued invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub customer_name: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: Decimal,
    /// Rate the invoice was issued at (`0.10` = 10%). Labels only; `tax` is
    /// the amount actually charged.
    pub tax_rate: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Verify the line and total arithmetic without recomputing anything.
    ///
    /// `subtotal == Σ items.total`, `total == subtotal + tax`, and every line
    /// satisfies `total == quantity * unit_price`.
    pub fn check_consistency(&self) -> DomainResult<()> {
        if self.items.is_empty() {
            return Err(DomainError::validation("invoice must have at least one item"));
        }
        for item in &self.items {
            item.check()?;
        }
        if self.tax_rate.is_sign_negative() && !self.tax_rate.is_zero() {
            return Err(DomainError::validation("tax rate cannot be negative"));
        }

        let lines: Decimal = self.items.iter().map(|i| i.total).sum();
        if self.subtotal != lines {
            return Err(DomainError::invariant(format!(
                "subtotal {} does not equal sum of line totals {}",
                self.subtotal, lines
            )));
        }
        if self.total != self.subtotal + self.tax {
            return Err(DomainError::invariant(format!(
                "total {} does not equal subtotal + tax {}",
                self.total,
                self.subtotal + self.tax
            )));
        }
        Ok(())
    }

    /// Case-insensitive substring match on customer name or invoice number.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.customer_name.to_lowercase().contains(&needle)
            || self.invoice_number.to_lowercase().contains(&needle)
    }

    pub fn references_product(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// An invoice being written: lines plus the tax rate to charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub items: Vec<InvoiceItem>,
    /// Fraction, e.g. `0.10` for 10%.
    pub tax_rate: Decimal,
}

impl InvoiceDraft {
    pub fn new(customer_name: impl Into<String>, tax_rate: Decimal) -> Self {
        Self {
            customer_name: customer_name.into(),
            items: Vec::new(),
            tax_rate,
        }
    }

    pub fn with_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|i| i.total).sum()
    }

    /// Tax on the subtotal, rounded to cents (halves away from zero).
    pub fn tax(&self) -> Decimal {
        round_cents(self.subtotal() * self.tax_rate)
    }

    /// Validate the draft and issue it as an invoice with derived totals.
    pub fn issue(
        self,
        id: InvoiceId,
        invoice_number: String,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Invoice> {
        if self.customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if self.tax_rate.is_sign_negative() && !self.tax_rate.is_zero() {
            return Err(DomainError::validation("tax rate cannot be negative"));
        }

        let subtotal = self.subtotal();
        let tax = self.tax();
        let invoice = Invoice {
            id,
            invoice_number,
            customer_name: self.customer_name.trim().to_string(),
            items: self.items,
            subtotal,
            tax_rate: self.tax_rate,
            tax,
            total: subtotal + tax,
            created_at,
        };

        invoice.check_consistency()?;
        Ok(invoice)
    }
}

/// Display label such as `INV-2024-001`.
pub fn format_invoice_number(year: i32, sequence: u32) -> String {
    format!("INV-{year}-{sequence:03}")
}
