//! Structured document (JSON) extraction

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use datalens_core::models::{DocumentSummary, ProcessingResult};
use serde_json::Value;

use crate::error::ExtractError;
use crate::traits::Extractor;

/// Summarizes a JSON document by its top-level shape: element count for an
/// array, key listing (in document order) for an object. Any other top-level
/// value is rejected with an explicit error instead of a defined summary.
pub struct JsonExtractor;

impl Extractor for JsonExtractor {
    fn summarize(&self, path: &Path) -> Result<ProcessingResult, ExtractError> {
        let file = File::open(path)?;
        let value: Value = serde_json::from_reader(BufReader::new(file))?;

        let summary = match value {
            Value::Array(items) => DocumentSummary::Sequence { items: items.len() },
            Value::Object(map) => DocumentSummary::Mapping {
                keys: map.keys().cloned().collect(),
            },
            _ => {
                return Err(ExtractError::UnsupportedShape(
                    "top-level JSON value must be an array or object".to_string(),
                ))
            }
        };

        Ok(ProcessingResult::Document(summary))
    }
}
