//! Core inventory model, independent of how it is presented

pub mod config;
pub mod log;
pub mod product;
pub mod store;
pub mod validation;

// Re-export main types for cleaner imports
pub use product::Product;
pub use store::ProductStore;
pub use validation::{ProductDraft, ValidationError};
