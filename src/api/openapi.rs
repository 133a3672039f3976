//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, health, products, reports, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lombard Avangard API",
        version = "1.0.0",
        description = "Pawnshop inventory and user management REST API"
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        // Users
        users::get_user,
        // Products
        products::list_products,
        products::create_product,
        products::book_product,
        products::unbook_product,
        products::delete_product,
        // Reports
        reports::generate_booked_pdf,
    ),
    components(
        schemas(
            // Auth
            auth::LoginResponse,
            crate::models::user::RegisterRequest,
            crate::models::user::LoginRequest,
            crate::models::user::Role,
            crate::models::user::UserProfile,
            // Products
            crate::models::product::Product,
            crate::models::product::CreateProduct,
            products::CreateProductResponse,
            // Health
            health::HealthResponse,
            health::ServiceInfo,
            // Common
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "User profiles"),
        (name = "products", description = "Product catalog and booking"),
        (name = "reports", description = "Booked-inventory reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
