//! Application settings.
//!
//! Loaded from `STOCKDESK_*` environment variables. Missing values fall back
//! to defaults; malformed values are errors.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockdesk_core::{DomainError, DomainResult, currency_symbol};
use stockdesk_observability::LogFormat;

pub const ENV_COMPANY_NAME: &str = "STOCKDESK_COMPANY_NAME";
pub const ENV_CONTACT_EMAIL: &str = "STOCKDESK_CONTACT_EMAIL";
pub const ENV_CURRENCY: &str = "STOCKDESK_CURRENCY";
pub const ENV_TAX_RATE: &str = "STOCKDESK_TAX_RATE";
pub const ENV_ANALYTICS_ID: &str = "STOCKDESK_ANALYTICS_ID";
pub const ENV_LOG_FORMAT: &str = "STOCKDESK_LOG_FORMAT";

pub const DEFAULT_COMPANY_NAME: &str = "StockDesk";
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOCKDESK_TAX_RATE must be a decimal fraction between 0 and 1, got `{0}`")]
    InvalidTaxRate(String),

    #[error("STOCKDESK_CURRENCY must be a three-letter ISO code, got `{0}`")]
    InvalidCurrency(String),

    #[error("STOCKDESK_CONTACT_EMAIL is not an email address: `{0}`")]
    InvalidEmail(String),

    #[error("STOCKDESK_LOG_FORMAT: {0}")]
    InvalidLogFormat(String),
}

/// Company profile, money settings and integrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub company_name: String,
    pub contact_email: Option<String>,
    /// ISO 4217 code, e.g. `USD`.
    pub currency: String,
    /// Fraction charged on invoice subtotals (`0.10` = 10%).
    pub tax_rate: Decimal,
    pub analytics_tracking_id: Option<String>,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            contact_email: None,
            currency: DEFAULT_CURRENCY.to_string(),
            tax_rate: Decimal::new(10, 2),
            analytics_tracking_id: None,
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup` (an environment, a map in tests).
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Settings::default();

        match get(ENV_COMPANY_NAME) {
            Some(name) => settings.company_name = name,
            None => tracing::warn!(
                "{ENV_COMPANY_NAME} not set; using default `{DEFAULT_COMPANY_NAME}`"
            ),
        }

        if let Some(email) = get(ENV_CONTACT_EMAIL) {
            if !looks_like_email(&email) {
                return Err(ConfigError::InvalidEmail(email));
            }
            settings.contact_email = Some(email);
        }

        if let Some(currency) = get(ENV_CURRENCY) {
            let code = currency.to_ascii_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidCurrency(currency));
            }
            settings.currency = code;
        }

        if let Some(raw) = get(ENV_TAX_RATE) {
            let rate = Decimal::from_str(&raw).map_err(|_| ConfigError::InvalidTaxRate(raw.clone()))?;
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ConfigError::InvalidTaxRate(raw));
            }
            settings.tax_rate = rate;
        }

        settings.analytics_tracking_id = get(ENV_ANALYTICS_ID);

        if let Some(raw) = get(ENV_LOG_FORMAT) {
            settings.log_format = raw
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::InvalidLogFormat(e.to_string()))?;
        }

        Ok(settings)
    }

    pub fn currency_symbol(&self) -> &str {
        currency_symbol(&self.currency)
    }

    pub fn analytics_connected(&self) -> bool {
        self.analytics_tracking_id.is_some()
    }

    /// Store an analytics tracking id. Nothing is contacted.
    pub fn connect_analytics(&mut self, tracking_id: &str) -> DomainResult<()> {
        let tracking_id = tracking_id.trim();
        if tracking_id.is_empty() {
            return Err(DomainError::validation("analytics tracking id cannot be empty"));
        }
        self.analytics_tracking_id = Some(tracking_id.to_string());
        tracing::info!(tracking_id, "analytics connected");
        Ok(())
    }

    pub fn disconnect_analytics(&mut self) {
        if self.analytics_tracking_id.take().is_some() {
            tracing::info!("analytics disconnected");
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
