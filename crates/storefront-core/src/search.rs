//! # Search
//!
//! Title filtering for the product list and the count label shown above it.

use crate::types::Product;

/// Filters products whose title contains `term`, ignoring case.
///
/// An empty or whitespace-only term returns every product. The relative order
/// of the input is kept.
///
/// ## Example
/// ```rust
/// use storefront_core::{filter_products, Price, Product};
///
/// let products = vec![
///     Product::new("1", "Relogio 1", Price::from_cents(100)),
///     Product::new("2", "Sapato", Price::from_cents(100)),
/// ];
///
/// assert_eq!(filter_products(&products, "relogio").len(), 1);
/// assert_eq!(filter_products(&products, "").len(), 2);
/// ```
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim();
    if term.is_empty() {
        return products.iter().collect();
    }

    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .collect()
}

/// Renders the product count: `"1 Product"`, otherwise `"N Products"`.
pub fn quantity_label(count: usize) -> String {
    if count == 1 {
        "1 Product".to_string()
    } else {
        format!("{count} Products")
    }
}
