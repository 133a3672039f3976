//! API handlers for the Lombard REST endpoints

pub mod auth;
pub mod health;
pub mod openapi;
pub mod products;
pub mod reports;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Standard success body for operations without a payload
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
