//! Business logic services

pub mod auth;
pub mod catalog;
pub mod reports;

use crate::{config::ReportConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub catalog: catalog::CatalogService,
    pub reports: reports::ReportService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, report_config: ReportConfig) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            reports: reports::ReportService::new(repository, report_config),
        }
    }
}
