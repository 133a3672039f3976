//! Lombard Avangard - Pawnshop Inventory Server
//!
//! A REST JSON API over PostgreSQL: user registration and login, a product
//! catalog with booking state, and PDF reports of the booked inventory.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
