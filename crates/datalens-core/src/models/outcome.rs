//! Per-file outcomes and the batch report
//!
//! One `FileOutcome` is produced per uploaded item, in receive order, whether
//! the item succeeded or not. Failures carry only a human-readable message;
//! there is deliberately no machine error taxonomy at this level.

use serde::Serialize;
use utoipa::ToSchema;

use super::summary::ProcessingResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Success,
    Failed,
}

/// The per-file result record returned to the caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FileOutcome {
    pub filename: String,
    pub status: UploadStatus,
    /// Stored size in bytes; present on success only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Failure message; present on failure only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub processing_result: Option<ProcessingResult>,
}

impl FileOutcome {
    pub fn success(
        filename: impl Into<String>,
        size: u64,
        processing_result: ProcessingResult,
    ) -> Self {
        Self {
            filename: filename.into(),
            status: UploadStatus::Success,
            size: Some(size),
            error: None,
            processing_result: Some(processing_result),
        }
    }

    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            status: UploadStatus::Failed,
            size: None,
            error: Some(error.into()),
            processing_result: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == UploadStatus::Success
    }
}

/// Aggregate over one batch of outcomes, order-preserving.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BatchReport {
    pub processed_files: Vec<FileOutcome>,
    pub total_files: usize,
    pub successful: usize,
}

impl BatchReport {
    pub fn from_outcomes(processed_files: Vec<FileOutcome>) -> Self {
        let total_files = processed_files.len();
        let successful = processed_files
            .iter()
            .filter(|outcome| outcome.is_success())
            .count();
        Self {
            processed_files,
            total_files,
            successful,
        }
    }

    pub fn all_successful(&self) -> bool {
        self.successful == self.total_files
    }

    pub fn message(&self) -> String {
        let mut message = format!("Processed {} file(s)", self.total_files);
        if !self.all_successful() {
            message.push_str(" with errors");
        }
        message
    }
}
