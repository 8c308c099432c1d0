use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity, ProductId};

/// A catalog product with its current stock level.
///
/// `stock` and `min_stock` are independent: a product may sit below, at or
/// above its reorder threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub min_stock: u32,
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Low stock means at or below the reorder threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// `stock * unit_price`.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.stock) * self.unit_price
    }

    /// Case-insensitive substring match on the product name.
    ///
    /// An empty needle matches every product.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for adding a product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub min_stock: u32,
    pub unit_price: Decimal,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, &self.category, self.unit_price)
    }

    /// Validate and stamp identity + creation time.
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> DomainResult<Product> {
        self.validate()?;
        Ok(Product {
            id,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            stock: self.stock,
            min_stock: self.min_stock,
            unit_price: self.unit_price,
            created_at,
        })
    }
}

/// Partial update of a product. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub unit_price: Option<Decimal>,
}

impl ProductUpdate {
    /// Produce the updated product. Identity and `created_at` never change.
    pub fn apply_to(&self, product: &Product) -> DomainResult<Product> {
        let updated = Product {
            id: product.id,
            name: self
                .name
                .as_deref()
                .map(str::trim)
                .unwrap_or(product.name.as_str())
                .to_string(),
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .unwrap_or(product.category.as_str())
                .to_string(),
            stock: self.stock.unwrap_or(product.stock),
            min_stock: self.min_stock.unwrap_or(product.min_stock),
            unit_price: self.unit_price.unwrap_or(product.unit_price),
            created_at: product.created_at,
        };

        validate_fields(&updated.name, &updated.category, updated.unit_price)?;
        Ok(updated)
    }
}

fn validate_fields(name: &str, category: &str, unit_price: Decimal) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if category.trim().is_empty() {
        return Err(DomainError::validation("category cannot be empty"));
    }
    if unit_price.is_sign_negative() && !unit_price.is_zero() {
        return Err(DomainError::validation("unit price cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn mouse() -> NewProduct {
        NewProduct {
            name: "Wireless Mouse".to_string(),
            category: "Electronics".to_string(),
            stock: 150,
            min_stock: 20,
            unit_price: dec!(29.99),
        }
    }

    #[test]
    fn into_product_trims_and_stamps_identity() {
        let id = ProductId::new();
        let mut input = mouse();
        input.name = "  Wireless Mouse ".to_string();

        let product = input.into_product(id, test_time()).unwrap();
        assert_eq!(product.id, id);
        assert_eq!(product.name, "Wireless Mouse");
        assert_eq!(product.stock_value(), dec!(4498.50));
    }

    #[test]
    fn rejects_blank_name() {
        let mut input = mouse();
        input.name = "   ".to_string();

        match input.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn rejects_negative_price() {
        let mut input = mouse();
        input.unit_price = dec!(-0.01);

        match input.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("unit price")),
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn low_stock_includes_threshold() {
        let mut product = mouse().into_product(ProductId::new(), test_time()).unwrap();
        product.stock = 20;
        assert!(product.is_low_stock());
        product.stock = 21;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn update_keeps_identity_and_unset_fields() {
        let product = mouse().into_product(ProductId::new(), test_time()).unwrap();
        let update = ProductUpdate {
            stock: Some(3),
            ..ProductUpdate::default()
        };

        let updated = update.apply_to(&product).unwrap();
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.stock, 3);
    }

    #[test]
    fn update_rejects_blank_category() {
        let product = mouse().into_product(ProductId::new(), test_time()).unwrap();
        let update = ProductUpdate {
            category: Some(" ".to_string()),
            ..ProductUpdate::default()
        };

        assert!(matches!(update.apply_to(&product), Err(DomainError::Validation(_))));
    }

    #[test]
    fn name_match_ignores_case() {
        let product = mouse().into_product(ProductId::new(), test_time()).unwrap();
        assert!(product.name_contains("MOUSE"));
        assert!(product.name_contains(""));
        assert!(!product.name_contains("keyboard"));
    }
}
