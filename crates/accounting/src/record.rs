use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, RecordId};

/// Direction of a financial record (determines the sign of its amount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for RecordKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(RecordKind::Income),
            "expense" => Ok(RecordKind::Expense),
            other => Err(DomainError::validation(format!("unknown record type: {other}"))),
        }
    }
}

/// A single income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub description: String,
    /// Always non-negative; the sign comes from `kind`.
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl FinancialRecord {
    pub fn is_income(&self) -> bool {
        self.kind == RecordKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == RecordKind::Expense
    }

    /// Amount with the sign applied: positive for income, negative for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            RecordKind::Income => self.amount,
            RecordKind::Expense => -self.amount,
        }
    }
}

impl Entity for FinancialRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for recording a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFinancialRecord {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl NewFinancialRecord {
    pub fn validate(&self) -> DomainResult<()> {
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        Ok(())
    }

    pub fn into_record(self, id: RecordId) -> DomainResult<FinancialRecord> {
        self.validate()?;
        Ok(FinancialRecord {
            id,
            kind: self.kind,
            description: self.description.trim().to_string(),
            amount: self.amount,
            category: self.category.trim().to_string(),
            date: self.date,
        })
    }
}
