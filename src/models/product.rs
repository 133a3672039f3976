//! Product model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Product as stored in the catalog
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// Serialized as a plain JSON number, not a fixed-point string
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub is_booked: bool,
    pub image_url: Option<String>,
}

/// Insert payload for a new product row
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image_url: Option<String>,
}

/// Create product request.
///
/// The price is accepted as a JSON number or a numeric string, matching what
/// the storefront sends; it is parsed and range-checked by the catalog
/// service.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<serde_json::Value>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: Decimal) -> Product {
        Product {
            id: 1,
            name: "Золотое кольцо".into(),
            price,
            is_booked: false,
            image_url: None,
        }
    }

    #[test]
    fn price_serializes_as_json_number() {
        let value = serde_json::to_value(product(Decimal::new(105, 1))).unwrap();
        assert!(value["price"].is_number());
        assert_eq!(value["price"].as_f64(), Some(10.5));
    }

    #[test]
    fn zero_price_serializes_as_numeric_zero() {
        let value = serde_json::to_value(product(Decimal::ZERO)).unwrap();
        assert_eq!(value["price"].as_f64(), Some(0.0));
    }

    #[test]
    fn create_product_accepts_number_and_string_prices() {
        let from_number: CreateProduct =
            serde_json::from_str(r#"{"name": "Часы", "price": 1500.5}"#).unwrap();
        assert!(from_number.price.unwrap().is_number());

        let from_string: CreateProduct =
            serde_json::from_str(r#"{"name": "Часы", "price": "1500.5"}"#).unwrap();
        assert!(from_string.price.unwrap().is_string());
    }
}
