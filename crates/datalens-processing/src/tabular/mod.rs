//! Tabular (CSV) extraction

mod stats;

use std::path::Path;

use datalens_core::models::{ProcessingResult, TabularSummary};

use crate::error::ExtractError;
use crate::traits::Extractor;

/// Summarizes a delimited tabular file with a header row: ordered column
/// names, describe()-style statistics over the numeric columns, and the data
/// row count.
pub struct CsvExtractor;

impl Extractor for CsvExtractor {
    fn summarize(&self, path: &Path) -> Result<ProcessingResult, ExtractError> {
        let mut reader = csv::Reader::from_path(path)?;

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut column_values: Vec<Vec<String>> = vec![Vec::new(); columns.len()];
        let mut row_count = 0usize;
        for record in reader.records() {
            let record = record?;
            for (index, field) in record.iter().enumerate() {
                column_values[index].push(field.to_string());
            }
            row_count += 1;
        }

        let summary_stats = stats::describe(&columns, &column_values);

        tracing::debug!(
            path = %path.display(),
            columns = columns.len(),
            rows = row_count,
            numeric_columns = summary_stats.len(),
            "Summarized tabular file"
        );

        Ok(ProcessingResult::Tabular(TabularSummary {
            columns,
            summary_stats,
            row_count,
        }))
    }
}
