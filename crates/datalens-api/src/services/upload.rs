//! Per-batch upload pipeline
//!
//! For each accepted item: save the raw bytes, summarize the persisted file,
//! persist the summary document. Any error anywhere in that chain converts
//! the one item into a failed outcome; the batch always continues.

use std::sync::Arc;

use datalens_core::models::{FileOutcome, ProcessingResult};
use datalens_processing::{
    sanitize_filename, ExtractError, FileKind, UploadValidator, ValidationError,
};
use datalens_storage::StorageError;

use crate::state::AppState;
use crate::utils::upload::{summary_key, UploadItem};

/// Error raised by the per-item pipeline.
///
/// The variants mark the stage an item failed in; the orchestrator flattens
/// them into the outcome's error text, so the wire contract stays a plain
/// string.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Io(#[from] StorageError),

    #[error("{0}")]
    Parse(#[from] ExtractError),
}

/// Batch upload orchestrator.
pub struct BatchProcessor {
    state: Arc<AppState>,
    validator: UploadValidator,
}

impl BatchProcessor {
    pub fn new(state: &Arc<AppState>) -> Self {
        let validator = UploadValidator::new(&state.config.allowed_extensions);
        Self {
            state: state.clone(),
            validator,
        }
    }

    /// Process every item in receive order; exactly one outcome per item.
    pub async fn process_batch(&self, items: Vec<UploadItem>) -> Vec<FileOutcome> {
        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            outcomes.push(self.process_item(item).await);
        }
        outcomes
    }

    async fn process_item(&self, item: UploadItem) -> FileOutcome {
        if item.filename.is_empty() {
            return FileOutcome::failed("empty", ValidationError::MissingFilename.to_string());
        }

        let sanitized = match self.accept(&item.filename) {
            Ok(sanitized) => sanitized,
            Err(err) => {
                tracing::debug!(file = %item.filename, error = %err, "Rejected upload item");
                return FileOutcome::failed(&item.filename, err.to_string());
            }
        };

        match self.run_pipeline(&sanitized, &item.data).await {
            Ok(result) => {
                tracing::info!(
                    file = %sanitized,
                    size_bytes = item.data.len(),
                    "Processed upload item"
                );
                FileOutcome::success(sanitized, item.data.len() as u64, result)
            }
            Err(err) => {
                tracing::warn!(file = %sanitized, error = %err, "Upload item failed");
                FileOutcome::failed(sanitized, err.to_string())
            }
        }
    }

    /// Allow-list check on the client's name, then sanitization.
    fn accept(&self, filename: &str) -> Result<String, PipelineError> {
        self.validator.validate(filename)?;
        Ok(sanitize_filename(filename)?)
    }

    /// save -> summarize -> persist summary. The saved upload stays on disk
    /// even when a later stage fails.
    async fn run_pipeline(
        &self,
        sanitized: &str,
        data: &[u8],
    ) -> Result<ProcessingResult, PipelineError> {
        self.state.uploads.write(sanitized, data).await?;

        let path = self.state.uploads.path_for(sanitized)?;
        let result = FileKind::from_name(sanitized).extractor().summarize(&path)?;

        let payload = serde_json::to_vec(&result).map_err(ExtractError::from)?;
        self.state
            .processed
            .write(&summary_key(sanitized), &payload)
            .await?;

        Ok(result)
    }
}
