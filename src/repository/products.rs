//! Products repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::product::{NewProduct, Product},
};

#[derive(Clone)]
pub struct ProductsRepository {
    pool: Pool<Postgres>,
}

impl ProductsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the whole catalog, ordered by id
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, is_booked, image_url FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Insert a new product; the booking flag defaults to false
    pub async fn create(&self, product: &NewProduct) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO products (name, price, image_url) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Delete a product permanently (no audit trail, no cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Flip the booking flag with a conditional update.
    ///
    /// The WHERE clause pins the expected prior value, so two concurrent
    /// booking requests cannot both succeed: the loser affects zero rows and
    /// is reported as a conflict.
    pub async fn set_booked(&self, id: i32, booked: bool) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE products SET is_booked = $1 WHERE id = $2 AND is_booked = $3")
                .bind(booked)
                .bind(id)
                .bind(!booked)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // Zero rows affected: the product is missing or already in the target state
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        if exists {
            Err(AppError::Conflict(if booked {
                format!("Product {} is already booked", id)
            } else {
                format!("Product {} is not booked", id)
            }))
        } else {
            Err(AppError::NotFound(format!(
                "Product with id {} not found",
                id
            )))
        }
    }

    /// Booked products ordered by name, the input for the booking report
    pub async fn list_booked(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, is_booked, image_url FROM products \
             WHERE is_booked = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
