//! Turns raw form input into a [`Product`].
use crate::core::product::Product;
use thiserror::Error;
use tracing::debug;

/// Raw, unvalidated text of the register form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField(&'static str),
    #[error("Price must be greater than 0 and quantity greater than 0")]
    InvalidAmount,
}

impl ProductDraft {
    /// Checks the draft and builds a product from its trimmed fields.
    ///
    /// Every field must be non-empty, the price must be a finite number
    /// above zero and the quantity a whole number of at least one.
    pub fn validate(&self) -> Result<Product, ValidationError> {
        let fields = [
            ("name", self.name.trim()),
            ("category", self.category.trim()),
            ("price", self.price.trim()),
            ("quantity", self.quantity.trim()),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            debug!(field, "Draft is missing a field");
            return Err(ValidationError::MissingField(*field));
        }
        let [(_, name), (_, category), (_, price), (_, quantity)] = fields;

        let price = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0);
        let quantity = quantity.parse::<u32>().ok().filter(|q| *q >= 1);

        match (price, quantity) {
            (Some(price), Some(quantity)) => Ok(Product::new(name, category, price, quantity)),
            _ => {
                debug!(price = %self.price, quantity = %self.quantity, "Draft has an invalid amount");
                Err(ValidationError::InvalidAmount)
            }
        }
    }
}

impl Product {
    /// Returns the product as form text, so it can go through the same checks as typed input.
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price.to_string(),
            quantity: self.quantity.to_string(),
        }
    }
}
