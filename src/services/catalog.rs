//! Product catalog service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::product::{CreateProduct, NewProduct, Product},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the whole catalog
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.repository.products.list().await
    }

    /// Validate and insert a new product
    pub async fn create_product(&self, request: CreateProduct) -> AppResult<i32> {
        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AppError::Validation("Product name and price are required".to_string())
            })?
            .to_string();

        let price = match request.price {
            Some(ref value) => parse_price(value)?,
            None => {
                return Err(AppError::Validation(
                    "Product name and price are required".to_string(),
                ))
            }
        };

        let image_url = request.image_url.filter(|url| !url.is_empty());

        self.repository
            .products
            .create(&NewProduct {
                name,
                price,
                image_url,
            })
            .await
    }

    /// Delete a product permanently
    pub async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.repository.products.delete(id).await
    }

    /// Mark a product as booked
    pub async fn book_product(&self, id: i32) -> AppResult<()> {
        self.repository.products.set_booked(id, true).await
    }

    /// Release the booking on a product
    pub async fn unbook_product(&self, id: i32) -> AppResult<()> {
        self.repository.products.set_booked(id, false).await
    }
}

/// Accept a price as a JSON number or a numeric string, rejecting negatives
fn parse_price(value: &serde_json::Value) -> AppResult<Decimal> {
    let price = match value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .and_then(|f| Decimal::try_from(f).ok())
            .ok_or_else(|| AppError::Validation("Price must be a number".to_string()))?,
        serde_json::Value::String(s) => s
            .trim()
            .parse::<Decimal>()
            .map_err(|_| AppError::Validation("Price must be a number".to_string()))?,
        _ => return Err(AppError::Validation("Price must be a number".to_string())),
    };

    if price < Decimal::ZERO {
        return Err(AppError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_numeric_prices() {
        assert_eq!(parse_price(&json!(10.5)).unwrap(), Decimal::new(105, 1));
        assert_eq!(parse_price(&json!(0)).unwrap(), Decimal::ZERO);
        assert_eq!(parse_price(&json!("1500.50")).unwrap(), Decimal::new(150050, 2));
        assert_eq!(parse_price(&json!(" 7 ")).unwrap(), Decimal::new(7, 0));
    }

    #[test]
    fn rejects_negative_prices() {
        assert!(matches!(
            parse_price(&json!(-1)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_price(&json!("-0.01")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_prices() {
        assert!(matches!(
            parse_price(&json!("expensive")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_price(&json!(true)),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_price(&json!(null)),
            Err(AppError::Validation(_))
        ));
    }
}
