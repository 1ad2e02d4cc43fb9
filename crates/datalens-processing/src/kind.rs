//! File kind dispatch
//!
//! The extension is parsed once, lowercased, and mapped to a closed set of
//! kinds. Anything accepted by intake but not covered by an extractor (e.g.
//! xlsx) is `Other` and summarizes to the unsupported sentinel.

use std::path::Path;

use datalens_core::models::ProcessingResult;

use crate::archive::ZipExtractor;
use crate::document::JsonExtractor;
use crate::error::ExtractError;
use crate::tabular::CsvExtractor;
use crate::traits::Extractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Zip,
    Json,
    Other,
}

impl FileKind {
    /// Look up the kind from the filename's last extension, case-insensitive.
    pub fn from_name(filename: &str) -> FileKind {
        match extension_of(filename).as_deref() {
            Some("csv") => FileKind::Csv,
            Some("zip") => FileKind::Zip,
            Some("json") => FileKind::Json,
            _ => FileKind::Other,
        }
    }

    /// The extractor implementation for this kind.
    pub fn extractor(&self) -> &'static dyn Extractor {
        match self {
            FileKind::Csv => &CsvExtractor,
            FileKind::Zip => &ZipExtractor,
            FileKind::Json => &JsonExtractor,
            FileKind::Other => &UnsupportedExtractor,
        }
    }
}

/// Lowercased substring after the last `.`, if any.
pub(crate) fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
}

/// Extractor for accepted kinds with no summarizer: always succeeds with the
/// sentinel result.
struct UnsupportedExtractor;

impl Extractor for UnsupportedExtractor {
    fn summarize(&self, _path: &Path) -> Result<ProcessingResult, ExtractError> {
        Ok(ProcessingResult::unsupported())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_lookup_is_case_insensitive() {
        assert_eq!(FileKind::from_name("data.csv"), FileKind::Csv);
        assert_eq!(FileKind::from_name("DATA.CSV"), FileKind::Csv);
        assert_eq!(FileKind::from_name("bundle.Zip"), FileKind::Zip);
        assert_eq!(FileKind::from_name("payload.json"), FileKind::Json);
    }

    #[test]
    fn unknown_extensions_map_to_other() {
        assert_eq!(FileKind::from_name("report.xlsx"), FileKind::Other);
        assert_eq!(FileKind::from_name("noextension"), FileKind::Other);
        assert_eq!(FileKind::from_name("trailing."), FileKind::Other);
    }

    #[test]
    fn last_extension_wins() {
        assert_eq!(FileKind::from_name("data.backup.csv"), FileKind::Csv);
        assert_eq!(FileKind::from_name("archive.csv.zip"), FileKind::Zip);
    }

    #[test]
    fn other_kind_summarizes_to_sentinel() {
        let result = FileKind::Other
            .extractor()
            .summarize(Path::new("report.xlsx"))
            .unwrap();
        assert_eq!(result, ProcessingResult::unsupported());
    }
}
