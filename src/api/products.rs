//! Product catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::product::{CreateProduct, Product},
};

use super::MessageResponse;

/// Create product response
#[derive(Serialize, ToSchema)]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: i32,
}

/// List all products in the catalog
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "Product list ordered by id", body = Vec<Product>)
    )
)]
pub async fn list_products(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.services.catalog.list_products().await?;
    Ok(Json(products))
}

/// Add a product to the catalog
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product added", body = CreateProductResponse),
        (status = 400, description = "Missing name or invalid price", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<CreateProductResponse>)> {
    let product_id = state.services.catalog.create_product(request).await?;

    tracing::info!(product_id, "product added");

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Product added successfully".to_string(),
            product_id,
        }),
    ))
}

/// Book a product
#[utoipa::path(
    put,
    path = "/products/{id}/book",
    tag = "products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product booked", body = MessageResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Product already booked", body = crate::error::ErrorResponse)
    )
)]
pub async fn book_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.book_product(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Product {} booked successfully",
        id
    ))))
}

/// Release the booking on a product
#[utoipa::path(
    put,
    path = "/products/{id}/unbook",
    tag = "products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Booking released", body = MessageResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Product is not booked", body = crate::error::ErrorResponse)
    )
)]
pub async fn unbook_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.unbook_product(id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Booking for product {} released",
        id
    ))))
}

/// Delete a product from the catalog
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    // TODO: restrict to the admin role once role enforcement lands
    state.services.catalog.delete_product(id).await?;

    tracing::info!(product_id = id, "product deleted");

    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
