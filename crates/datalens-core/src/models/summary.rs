//! Processing result models
//!
//! `ProcessingResult` is a closed sum over the shapes the extractors emit.
//! Serialization is untagged: each variant writes the same bare-object shape
//! the summary JSON files on disk have always carried, so consumers of those
//! files never see the variant names.

use std::collections::BTreeMap;

use serde::Serialize;

/// Result of summarizing one persisted upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessingResult {
    Tabular(TabularSummary),
    Archive(ArchiveSummary),
    Document(DocumentSummary),
    Unsupported { error: String },
}

impl ProcessingResult {
    /// Sentinel for accepted-but-unsummarizable kinds (e.g. xlsx).
    ///
    /// This is a successful outcome's payload, not a failure.
    pub fn unsupported() -> Self {
        ProcessingResult::Unsupported {
            error: "Unsupported file type for processing".to_string(),
        }
    }
}

/// Column names, per-numeric-column statistics, and the data row count of a
/// delimited tabular file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularSummary {
    pub columns: Vec<String>,
    pub summary_stats: BTreeMap<String, ColumnStats>,
    pub row_count: usize,
}

/// describe()-style numeric summary for a single column.
///
/// `std` is the sample standard deviation (ddof = 1); quartiles use linear
/// interpolation between closest ranks. Field names match the statistic
/// labels consumers of the summary files expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    #[serde(rename = "25%")]
    pub q1: f64,
    #[serde(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    pub q3: f64,
    pub max: f64,
}

/// Per-entry summaries for every `.csv` member of an archive, keyed by the
/// entry's full path inside the archive. Non-csv entries are absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArchiveSummary {
    pub entries: BTreeMap<String, ArchiveEntrySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchiveEntrySummary {
    pub columns: Vec<String>,
    pub row_count: usize,
}

/// Shape report for a structured document: element count for a top-level
/// sequence, key listing (in document order) for a top-level mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentSummary {
    Sequence { items: usize },
    Mapping { keys: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabular_summary_serializes_to_flat_object() {
        let mut summary_stats = BTreeMap::new();
        summary_stats.insert(
            "a".to_string(),
            ColumnStats {
                count: 2,
                mean: 1.5,
                std: 0.7071067811865476,
                min: 1.0,
                q1: 1.25,
                median: 1.5,
                q3: 1.75,
                max: 2.0,
            },
        );
        let result = ProcessingResult::Tabular(TabularSummary {
            columns: vec!["a".to_string(), "b".to_string()],
            summary_stats,
            row_count: 2,
        });

        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["columns"], serde_json::json!(["a", "b"]));
        assert_eq!(json["row_count"], 2);
        assert_eq!(json["summary_stats"]["a"]["count"], 2);
        assert_eq!(json["summary_stats"]["a"]["25%"], 1.25);
        assert_eq!(json["summary_stats"]["a"]["50%"], 1.5);
        // No variant tag anywhere in the output
        assert!(json.get("Tabular").is_none());
    }

    #[test]
    fn archive_summary_serializes_as_entry_map() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "data/x.csv".to_string(),
            ArchiveEntrySummary {
                columns: vec!["id".to_string()],
                row_count: 3,
            },
        );
        let result = ProcessingResult::Archive(ArchiveSummary { entries });

        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["data/x.csv"]["row_count"], 3);
        assert_eq!(json["data/x.csv"]["columns"], serde_json::json!(["id"]));
    }

    #[test]
    fn document_summary_shapes() {
        let sequence = ProcessingResult::Document(DocumentSummary::Sequence { items: 3 });
        assert_eq!(
            serde_json::to_value(&sequence).unwrap(),
            serde_json::json!({"items": 3})
        );

        let mapping = ProcessingResult::Document(DocumentSummary::Mapping {
            keys: vec!["a".to_string(), "b".to_string()],
        });
        assert_eq!(
            serde_json::to_value(&mapping).unwrap(),
            serde_json::json!({"keys": ["a", "b"]})
        );
    }

    #[test]
    fn unsupported_sentinel_carries_fixed_message() {
        let json = serde_json::to_value(ProcessingResult::unsupported()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Unsupported file type for processing"})
        );
    }
}
