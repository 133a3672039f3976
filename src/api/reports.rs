//! Booking report endpoints

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppResult;

/// Download the booked-products report as a PDF attachment
#[utoipa::path(
    get,
    path = "/generate-booked-pdf",
    tag = "reports",
    responses(
        (status = 200, description = "PDF report of booked products", body = Vec<u8>, content_type = "application/pdf"),
        (status = 404, description = "No booked products", body = crate::error::ErrorResponse)
    )
)]
pub async fn generate_booked_pdf(State(state): State<crate::AppState>) -> AppResult<Response> {
    let report = state.services.reports.booked_products_pdf().await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.filename),
        ),
    ];

    Ok((headers, report.bytes).into_response())
}
