use serde::{Deserialize, Serialize};

use super::{CatalogItem, ItemId};

/// A makeup product in the shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub price: f64,
    #[serde(default, alias = "imageUrl")]
    pub image: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
}

impl Product {
    /// Star glyphs for the rating: one `★` per whole star, `½` for a remainder.
    pub fn star_rating(&self) -> String {
        let whole = self.rating.max(0.0).floor();
        let mut stars = "★".repeat(whole as usize);
        if self.rating - whole > f32::EPSILON {
            stars.push('½');
        }
        stars
    }

    /// Price formatted for display, dropping cents when they are zero.
    pub fn display_price(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }
}

impl CatalogItem for Product {
    fn id(&self) -> ItemId {
        self.id.clone()
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn price(&self) -> Option<f64> {
        Some(self.price)
    }

    fn searchable_fields(&self) -> [&str; 2] {
        [&self.name, &self.brand]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(rating: f32, price: f64) -> Product {
        Product {
            id: ItemId::Num(1),
            name: "Velvet Matte Lipstick".to_string(),
            brand: "Luxe Cosmetics".to_string(),
            category: "lipstick".to_string(),
            price,
            image: String::new(),
            rating,
            reviews: 0,
        }
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(product(4.0, 1.0).star_rating(), "★★★★");
        assert_eq!(product(4.5, 1.0).star_rating(), "★★★★½");
        assert_eq!(product(0.0, 1.0).star_rating(), "");
    }

    #[test]
    fn test_display_price() {
        assert_eq!(product(0.0, 28.0).display_price(), "$28");
        assert_eq!(product(0.0, 28.5).display_price(), "$28.50");
    }

    #[test]
    fn test_deserialize_with_image_url_alias() {
        let json = r#"{
            "id": "2",
            "name": "Flawless Foundation",
            "brand": "Glow Studio",
            "price": 42,
            "category": "foundation",
            "imageUrl": "/foundation.jpg",
            "rating": 4.6,
            "reviews": 189
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ItemId::from("2"));
        assert_eq!(p.image, "/foundation.jpg");
        assert_eq!(p.price(), Some(42.0));
    }

    #[test]
    fn test_search_covers_name_and_brand() {
        let p = product(4.8, 28.0);
        assert!(p.matches_text("velvet"));
        assert!(p.matches_text("luxe"));
        assert!(!p.matches_text("mascara"));
    }
}
