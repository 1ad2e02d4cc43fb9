//! Batch upload endpoint

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use datalens_core::models::BatchReport;
use datalens_core::AppError;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::BatchProcessor;
use crate::state::AppState;
use crate::utils::upload::collect_upload_items;

/// Response envelope for a processed batch.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// AND over all per-file outcomes.
    pub success: bool,
    pub message: String,
    pub data: BatchReport,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "upload",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Batch accepted; per-file outcomes in the body", body = UploadResponse),
        (status = 400, description = "No files selected", body = ErrorResponse),
        (status = 413, description = "Request body exceeds the upload cap", body = ErrorResponse)
    )
)]
pub async fn upload_files(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let items = collect_upload_items(multipart).await.map_err(HttpAppError)?;

    if items.is_empty() {
        return Err(HttpAppError(AppError::InvalidInput(
            "No files selected".to_string(),
        )));
    }

    let processor = BatchProcessor::new(&state);
    let outcomes = processor.process_batch(items).await;
    let report = BatchReport::from_outcomes(outcomes);

    tracing::info!(
        total_files = report.total_files,
        successful = report.successful,
        "Processed upload batch"
    );

    let success = report.all_successful();
    let message = report.message();
    Ok(Json(UploadResponse {
        success,
        message,
        data: report,
    }))
}
