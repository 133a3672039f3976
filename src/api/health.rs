//! Health check and service banner endpoints

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
}

/// Service banner served at the root path
#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Root banner listing the main API endpoints
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Ломбард Авангард API".to_string(),
        status: "running".to_string(),
        endpoints: vec![
            "/api/login".to_string(),
            "/api/register".to_string(),
            "/api/products".to_string(),
        ],
    })
}
