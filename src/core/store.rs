//! In-memory product collection and its aggregates.
use crate::core::product::Product;
use tracing::debug;

/// Ordered collection of every product registered during this process.
///
/// Insertion order is preserved and names are not required to be unique;
/// lookups by name return the first match.
#[derive(Debug, Default, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `products` in iteration order.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();
        for product in products {
            store.add(product);
        }
        store
    }

    /// Appends a product. No validation happens here.
    pub fn add(&mut self, product: Product) {
        debug!(name = %product.name, quantity = product.quantity, "Adding product");
        self.products.push(product);
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the first product whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Sum of `price * quantity` over all products.
    pub fn total_value(&self) -> f64 {
        self.products
            .iter()
            .fold(0.0, |total, p| total + p.stock_value())
    }

    /// Sum of quantities over all products.
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stationery_store() -> ProductStore {
        let mut store = ProductStore::new();
        store.add(Product::new("Caneta", "Papelaria", 2.5, 10));
        store.add(Product::new("Caderno", "Papelaria", 15.0, 3));
        store
    }

    #[test]
    fn test_empty_store() {
        let store = ProductStore::new();
        assert_eq!(store.total_value(), 0.0);
        assert!(!store.total_value().is_sign_negative());
        assert_eq!(store.total_quantity(), 0);
        assert!(store.all().is_empty());
        assert!(store.is_empty());
        assert!(store.find_by_name("Caneta").is_none());
        assert!(store.find_by_name("").is_none());
    }

    #[test]
    fn test_aggregates() {
        let store = stationery_store();
        assert_eq!(store.total_value(), 70.0);
        assert_eq!(store.total_quantity(), 13);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_by_name() {
        let store = stationery_store();
        let found = store.find_by_name("Caderno").expect("Caderno should exist");
        assert_eq!(found, &store.all()[1]);
        assert!(store.find_by_name("caderno").is_none());
        assert!(store.find_by_name("Borracha").is_none());
    }

    #[test]
    fn test_duplicate_names_return_first() {
        let mut store = ProductStore::new();
        store.add(Product::new("Lapis", "Papelaria", 1.0, 5));
        store.add(Product::new("Lapis", "Papelaria", 1.0, 8));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_name("Lapis").map(|p| p.quantity), Some(5));
        assert_eq!(store.total_quantity(), 13);
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let store = stationery_store();
        let names: Vec<&str> = store.all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Caneta", "Caderno"]);
    }

    #[test]
    fn test_with_products_matches_sequential_add() {
        let seeded = ProductStore::with_products(stationery_store().all().to_vec());
        assert_eq!(seeded.all(), stationery_store().all());
    }

    #[test]
    fn test_total_quantity_does_not_overflow() {
        let store = ProductStore::with_products(vec![
            Product::new("A", "X", 1.0, u32::MAX),
            Product::new("B", "X", 1.0, u32::MAX),
        ]);
        assert_eq!(store.total_quantity(), 2 * u64::from(u32::MAX));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn product_strategy() -> impl Strategy<Value = Product> {
            (
                "[A-Za-z]{1,8}",
                "[A-Za-z]{1,8}",
                1u32..100_000u32,
                1u32..10_000u32,
            )
                .prop_map(|(name, category, cents, quantity)| {
                    Product::new(name, category, f64::from(cents) / 100.0, quantity)
                })
        }

        proptest! {
            /// Property: aggregates equal the sums over every added product.
            #[test]
            fn aggregates_match_added_products(
                products in prop::collection::vec(product_strategy(), 0..50)
            ) {
                let mut store = ProductStore::new();
                for product in &products {
                    store.add(product.clone());
                }

                let expected_quantity: u64 = products.iter().map(|p| u64::from(p.quantity)).sum();
                let expected_value: f64 = products.iter().map(|p| p.price * f64::from(p.quantity)).sum();

                prop_assert_eq!(store.total_quantity(), expected_quantity);
                prop_assert!((store.total_value() - expected_value).abs() <= 1e-6 * expected_value.max(1.0));
            }

            /// Property: `all` returns products in insertion order and lookup finds the first match.
            #[test]
            fn order_and_first_match(
                products in prop::collection::vec(product_strategy(), 1..50)
            ) {
                let store = ProductStore::with_products(products.clone());
                prop_assert_eq!(store.all(), products.as_slice());

                for product in &products {
                    let first = products.iter().find(|p| p.name == product.name);
                    prop_assert_eq!(store.find_by_name(&product.name), first);
                }
            }
        }
    }
}
