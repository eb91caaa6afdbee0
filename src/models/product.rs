use serde::{Deserialize, Serialize};

/// A catalog product as served to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: u64,
    /// Display name
    pub name: String,
    /// Category label (e.g. "Outerwear", "Accessories")
    pub category: String,
    /// Price in the shop currency, non-negative
    pub price: f64,
    /// Image URI; camelCase on the wire to match the storefront contract
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Free-form marketing copy
    pub description: String,
}

impl Product {
    /// Creates a new product record
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            image_url: image_url.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product() {
        let product = Product::new(1, "Wool Scarf", "Accessories", 39.99, "https://example.com/scarf.png", "A cozy scarf");
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Wool Scarf");
        assert_eq!(product.category, "Accessories");
    }

    #[test]
    fn test_image_url_serializes_camel_case() {
        let product = Product::new(2, "Tee", "Tops", 24.99, "https://example.com/tee.png", "");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/tee.png");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_product_round_trips() {
        let product = Product::new(3, "Chinos", "Pants", 59.99, "https://example.com/chinos.png", "Slim fit");
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, product);
    }
}
