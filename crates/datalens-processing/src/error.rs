//! Extraction errors
//!
//! Whatever a parser raises is carried as-is; the orchestrator stringifies
//! it into the failed outcome, so these messages are user-visible.

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported document shape: {0}")]
    UnsupportedShape(String),
}
