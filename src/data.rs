//! Static catalog data bundled into the binary.

use glowboard_core::{Product, Trend};

const PRODUCTS_JSON: &str = include_str!("../assets/data/products.json");
const FALLBACK_TRENDS_JSON: &str = include_str!("../assets/data/fallback_trends.json");

/// Category controls of the shop sidebar, as (label, display name).
pub const PRODUCT_CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Products"),
    ("lipstick", "Lipstick"),
    ("foundation", "Foundation"),
    ("eyeshadow", "Eyeshadow"),
    ("mascara", "Mascara"),
    ("blush", "Blush"),
];

/// Theme suggestions on the journal page.
pub const EXAMPLE_THEMES: &[&str] = &[
    "Inspired by BLACKPINK",
    "Minimalist Fashion",
    "Spring Trends",
    "Vintage Style",
    "K-pop Fashion",
    "Sustainable Style",
    "Bold Colors",
    "Natural Beauty",
    "Street Style",
];

/// Mood options on the journal entry form.
pub const JOURNAL_MOODS: &[&str] = &["inspired", "confident", "playful", "calm", "bold"];

/// The shop catalog.
pub fn products() -> Vec<Product> {
    parse_bundled("products", PRODUCTS_JSON)
}

/// Trends shown while the backend is unreachable or has nothing to serve.
pub fn fallback_trends() -> Vec<Trend> {
    parse_bundled("fallback trends", FALLBACK_TRENDS_JSON)
}

fn parse_bundled<T: serde::de::DeserializeOwned>(what: &str, json: &str) -> Vec<T> {
    serde_json::from_str(json).unwrap_or_else(|err| {
        tracing::error!(what, error = %err, "bundled data is invalid");
        Vec::new()
    })
}

/// Display name for a category label: the configured name, or the label
/// capitalized.
pub fn category_name(label: &str) -> String {
    if let Some((_, name)) = PRODUCT_CATEGORIES.iter().find(|(l, _)| *l == label) {
        return name.to_string();
    }
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowboard_core::CatalogItem;

    #[test]
    fn test_products_parse() {
        let products = products();
        assert_eq!(products.len(), 20);
        for product in &products {
            assert!(
                PRODUCT_CATEGORIES
                    .iter()
                    .any(|(label, _)| *label == product.category),
                "unknown category {}",
                product.category
            );
            assert!(product.price >= 0.0 && product.price <= 200.0);
            assert!(product.image.starts_with('/'));
        }
    }

    #[test]
    fn test_product_ids_unique() {
        let mut ids: Vec<_> = products().iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_fallback_trends_parse() {
        let trends = fallback_trends();
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0].name, "Minimalist Fashion");
        assert_eq!(trends[2].popularity.as_deref(), Some("Growing"));
        assert_eq!(trends[1].category, "vintage");
    }

    #[test]
    fn test_category_name() {
        assert_eq!(category_name("all"), "All Products");
        assert_eq!(category_name("mascara"), "Mascara");
        assert_eq!(category_name("silhouette"), "Silhouette");
        assert_eq!(category_name(""), "");
    }
}
