//! Product records handed to the cart.

use crate::error::CartError;
use crate::ids::ProductRef;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A product as served by the backend's product listing.
///
/// The cart only reads these fields; anything else the backend sends
/// (brand, categories, discount, description) is ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier.
    pub id: ProductRef,
    /// Internal product name.
    #[serde(default)]
    pub name: String,
    /// Customer-facing title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Image URL, if the product has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Create a product with no image.
    pub fn new(
        id: impl Into<ProductRef>,
        name: impl Into<String>,
        title: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            price,
            image_url: None,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Decode the JSON array returned by the product listing endpoint.
    pub fn list_from_json(body: &str) -> Result<Vec<Product>, CartError> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if !value.is_array() {
            return Err(CartError::InvalidProductListing(
                "expected a JSON array".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_from_json() {
        let body = r#"[
            {"id": 1, "name": "lamp", "title": "Desk Lamp", "price": 24.5,
             "imageUrl": "https://cdn.example/lamp.jpg", "brandId": 3},
            {"id": "a1f0", "name": "mug", "title": "Mug", "price": "7.00"}
        ]"#;

        let products = Product::list_from_json(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductRef::Number(1));
        assert_eq!(products[0].price, Price::from_cents(2450));
        assert_eq!(
            products[0].image_url.as_deref(),
            Some("https://cdn.example/lamp.jpg")
        );
        assert_eq!(products[1].id, ProductRef::Text("a1f0".to_string()));
        assert!(products[1].image_url.is_none());
    }

    #[test]
    fn test_list_rejects_non_array() {
        let result = Product::list_from_json(r#"{"id": 1}"#);
        assert!(matches!(result, Err(CartError::InvalidProductListing(_))));
    }

    #[test]
    fn test_list_rejects_malformed_json() {
        let result = Product::list_from_json("[{");
        assert!(matches!(result, Err(CartError::SerializationError(_))));
    }
}
