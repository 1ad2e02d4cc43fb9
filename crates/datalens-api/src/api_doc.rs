//! OpenAPI documentation

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::upload::UploadResponse;
use datalens_core::models::{BatchReport, FileOutcome, UploadStatus};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "datalens API",
        description = "Upload files and receive per-file introspection summaries"
    ),
    paths(crate::handlers::upload::upload_files),
    components(schemas(
        UploadResponse,
        ErrorResponse,
        BatchReport,
        FileOutcome,
        UploadStatus
    )),
    tags((name = "upload", description = "File upload and summarization"))
)]
pub struct ApiDoc;
