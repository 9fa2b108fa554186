//! Renders the product list, product details and statistics screens.
//!
//! Every screen is a pure function of the store's current contents, so the
//! session simply re-renders after each change.
use super::ui;
use crate::core::{Product, ProductStore};
use comfy_table::Cell;

/// Table of every registered product in insertion order.
pub fn product_list(store: &ProductStore) -> String {
    let mut output = format!("{}\n\n", ui::style_text("Products", ui::StyleType::Title));

    if store.is_empty() {
        output.push_str(&ui::style_text(
            "No products registered yet.",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Product"),
        ui::header_cell("Category"),
        ui::header_cell("Quantity"),
    ]);

    for (i, product) in store.all().iter().enumerate() {
        table.add_row(vec![
            ui::number_cell(i + 1),
            Cell::new(&product.name),
            Cell::new(&product.category),
            ui::number_cell(format!("{} units", product.quantity)),
        ]);
    }

    output.push_str(&table.to_string());
    output
}

/// Details of the first product called `name`.
pub fn product_details(store: &ProductStore, name: &str, currency: &str) -> String {
    match store.find_by_name(name) {
        Some(product) => render_details(product, currency),
        None => ui::style_text(&format!("Product '{name}' not found."), ui::StyleType::Error),
    }
}

fn render_details(product: &Product, currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.add_row(vec![ui::header_cell("Name"), Cell::new(&product.name)]);
    table.add_row(vec![ui::header_cell("Category"), Cell::new(&product.category)]);
    table.add_row(vec![
        ui::header_cell("Price"),
        ui::number_cell(ui::format_money(currency, product.price)),
    ]);
    table.add_row(vec![
        ui::header_cell("Quantity in stock"),
        ui::number_cell(product.quantity),
    ]);

    format!(
        "{}\n\n{}",
        ui::style_text(&product.name, ui::StyleType::Title),
        table
    )
}

/// Aggregate value and quantity of the whole inventory.
pub fn statistics(store: &ProductStore, currency: &str) -> String {
    let total_value = ui::format_money(currency, store.total_value());
    let total_quantity = store.total_quantity().to_string();

    format!(
        "{}\n\n{} {}\n{} {}",
        ui::style_text("Statistics", ui::StyleType::Title),
        ui::style_text("Total stock value:", ui::StyleType::TotalLabel),
        ui::style_text(&total_value, ui::StyleType::TotalValue),
        ui::style_text("Total quantity of products:", ui::StyleType::TotalLabel),
        ui::style_text(&total_quantity, ui::StyleType::TotalValue),
    )
}
