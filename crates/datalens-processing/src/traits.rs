//! Extractor trait

use std::path::Path;

use datalens_core::models::ProcessingResult;

use crate::error::ExtractError;

/// Converts a persisted file's bytes into a `ProcessingResult`.
///
/// Extractors read from disk and are pure with respect to everything else;
/// any parser or IO failure propagates to the per-file error boundary in the
/// orchestrator.
pub trait Extractor: Send + Sync {
    fn summarize(&self, path: &Path) -> Result<ProcessingResult, ExtractError>;
}
