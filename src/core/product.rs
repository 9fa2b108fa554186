use serde::{Deserialize, Serialize};

/// A single inventory item: what it is, what one unit costs and how many
/// units are on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            quantity,
        }
    }

    /// Value of the units in stock, `price * quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_value() {
        let product = Product::new("Caneta", "Papelaria", 2.5, 10);
        assert_eq!(product.stock_value(), 25.0);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml_str = r#"
name: "Caderno"
category: "Papelaria"
price: 15
quantity: 3
"#;
        let product: Product = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(product, Product::new("Caderno", "Papelaria", 15.0, 3));
    }
}
