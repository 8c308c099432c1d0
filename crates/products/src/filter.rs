//! Category filtering for the product list.

use core::convert::Infallible;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Category selection: every category, or one exact category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Label that selects every category.
    pub const ALL_LABEL: &'static str = "All";

    /// `"All"` selects everything; any other text is an exact category name.
    pub fn parse(label: &str) -> Self {
        if label == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// Exact, case-sensitive comparison.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_LABEL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Category names in first-seen order, without duplicates.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
