//! Product model.

use serde::{Deserialize, Serialize};

/// Id of a product that has not been saved yet. A blank product with this id
/// puts the edit page into create mode instead of edit mode.
pub const NEW_PRODUCT_ID: u32 = 0;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Numeric product id. `0` means "not yet saved".
    pub id: u32,
    /// Display name.
    pub product_name: String,
    /// Stock code, e.g. "GDN-0011".
    pub product_code: String,
    /// Category name.
    pub category: String,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Release date, ISO-ish display string.
    pub release_date: String,
    /// Unit price.
    pub price: f64,
    /// Full description.
    pub description: String,
    /// Average review rating, 0.0 to 5.0.
    pub star_rating: f32,
    /// Product image URL.
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    /// A blank product with the create-sentinel id.
    pub fn blank() -> Self {
        Self {
            id: NEW_PRODUCT_ID,
            product_name: String::new(),
            product_code: String::new(),
            category: String::new(),
            tags: Vec::new(),
            release_date: String::new(),
            price: 0.0,
            description: String::new(),
            star_rating: 0.0,
            image_url: String::new(),
        }
    }

    /// Whether this product has never been saved.
    pub fn is_new(&self) -> bool {
        self.id == NEW_PRODUCT_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_product_is_new() {
        let product = Product::blank();
        assert!(product.is_new());
        assert!(product.product_name.is_empty());
    }

    #[test]
    fn test_product_json_field_names() {
        let json = r#"{
            "id": 5,
            "productName": "Hammer",
            "productCode": "TBX-0048",
            "category": "Toolbox",
            "releaseDate": "May 21, 2021",
            "price": 8.9,
            "description": "Curved claw steel hammer",
            "starRating": 4.8
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 5);
        assert_eq!(product.product_name, "Hammer");
        assert!(!product.is_new());
        assert!(product.tags.is_empty());
    }
}
