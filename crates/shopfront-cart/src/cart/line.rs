//! Cart line type.

use crate::ids::{LineId, ProductRef};
use crate::money::{format_amount, Price};
use crate::product::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One line in the cart: a product snapshot plus a quantity.
///
/// Field names on the wire match the persisted snapshot format:
/// `{id, name, title, price, imageUrl, originalId, quantity}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line identifier, unique within the cart.
    pub id: LineId,
    /// Product name at add time.
    #[serde(default)]
    pub name: String,
    /// Product title at add time.
    #[serde(default)]
    pub title: String,
    /// Unit price at add time.
    pub price: Price,
    /// Product image at add time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Identifier of the product this line was created from.
    pub original_id: ProductRef,
    /// Quantity, at least 1.
    #[serde(default = "default_quantity", deserialize_with = "quantity_or_one")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// Older snapshots may carry `null` or `0`; both read as one unit.
fn quantity_or_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let quantity = Option::<i64>::deserialize(deserializer)?;
    Ok(match quantity {
        None | Some(0) => default_quantity(),
        Some(n) => n,
    })
}

impl CartLine {
    /// Snapshot `product` into a new line of quantity 1.
    pub fn from_product(id: LineId, product: &Product) -> Self {
        Self {
            id,
            name: product.name.clone(),
            title: product.title.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            original_id: product.id.clone(),
            quantity: 1,
        }
    }

    /// Whether adding `product` should merge into this line.
    ///
    /// Matches on product id, name and exact price together: a product
    /// whose name or price changed since it was added starts a new line.
    pub fn matches(&self, product: &Product) -> bool {
        self.original_id == product.id && self.name == product.name && self.price == product.price
    }

    /// Exact `price * quantity`.
    pub fn subtotal(&self) -> Decimal {
        self.price.times(self.quantity)
    }

    /// `price * quantity` rounded to two decimals, e.g. `"59.97"`.
    pub fn subtotal_display(&self) -> String {
        format_amount(self.subtotal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Product {
        Product::new(7, "lamp", "Desk Lamp", Price::from_cents(2450))
            .with_image("https://cdn.example/lamp.jpg")
    }

    #[test]
    fn test_snapshot_copies_product_fields() {
        let line = CartLine::from_product(LineId::new(1), &lamp());
        assert_eq!(line.original_id, ProductRef::Number(7));
        assert_eq!(line.name, "lamp");
        assert_eq!(line.title, "Desk Lamp");
        assert_eq!(line.price, Price::from_cents(2450));
        assert_eq!(line.image_url.as_deref(), Some("https://cdn.example/lamp.jpg"));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_matches_requires_id_name_and_price() {
        let line = CartLine::from_product(LineId::new(1), &lamp());
        assert!(line.matches(&lamp()));

        let mut renamed = lamp();
        renamed.name = "lamp-v2".to_string();
        assert!(!line.matches(&renamed));

        let mut repriced = lamp();
        repriced.price = Price::from_cents(1999);
        assert!(!line.matches(&repriced));

        let mut other = lamp();
        other.id = ProductRef::Number(8);
        assert!(!line.matches(&other));

        // Title and image are display-only.
        let mut retitled = lamp();
        retitled.title = "Lamp (sale)".to_string();
        retitled.image_url = None;
        assert!(line.matches(&retitled));
    }

    #[test]
    fn test_wire_format() {
        let mut line = CartLine::from_product(LineId::new(1700000000000), &lamp());
        line.quantity = 3;

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1700000000000u64,
                "name": "lamp",
                "title": "Desk Lamp",
                "price": 24.5,
                "imageUrl": "https://cdn.example/lamp.jpg",
                "originalId": 7,
                "quantity": 3
            })
        );
    }

    #[test]
    fn test_missing_quantity_reads_as_one() {
        let line: CartLine = serde_json::from_str(
            r#"{"id": 5, "name": "mug", "title": "Mug", "price": 7, "originalId": "m-1"}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, 1);
        assert!(line.image_url.is_none());
    }

    #[test]
    fn test_zero_or_null_quantity_reads_as_one() {
        for quantity in ["0", "null"] {
            let line: CartLine = serde_json::from_str(&format!(
                r#"{{"id": 5, "name": "mug", "title": "Mug", "price": 7, "originalId": 1, "quantity": {quantity}}}"#
            ))
            .unwrap();
            assert_eq!(line.quantity, 1);
        }
    }

    #[test]
    fn test_matches_compares_sub_cent_prices_exactly() {
        let eighth = Product::new(1, "bolt", "Bolt", "0.125".parse().unwrap());
        let line = CartLine::from_product(LineId::new(1), &eighth);
        assert!(line.matches(&eighth));

        let rounded = Product::new(1, "bolt", "Bolt", "0.13".parse().unwrap());
        assert!(!line.matches(&rounded));

        // Same number, different spelling.
        let padded = Product::new(1, "bolt", "Bolt", "0.1250".parse().unwrap());
        assert!(line.matches(&padded));
    }

    #[test]
    fn test_subtotal_display() {
        let mut line = CartLine::from_product(LineId::new(1), &lamp());
        line.quantity = 3;
        assert_eq!(line.subtotal_display(), "73.50");

        let mut bolts = CartLine::from_product(
            LineId::new(2),
            &Product::new(2, "bolt", "Bolt", "0.125".parse().unwrap()),
        );
        assert_eq!(bolts.subtotal_display(), "0.13");
        bolts.quantity = 4;
        assert_eq!(bolts.subtotal_display(), "0.50");
    }
}
