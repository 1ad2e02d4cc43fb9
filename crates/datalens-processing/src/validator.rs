//! Upload validation and filename sanitization

use std::path::Path;

use crate::kind::extension_of;

/// Validation errors for uploaded items.
///
/// Display strings are the exact messages carried by failed outcomes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No selected file")]
    MissingFilename,

    #[error("File type not allowed")]
    DisallowedType,

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

/// Upload validator
///
/// Holds the extension allow-set from configuration; checks names only,
/// never content (extractor selection is equally extension-driven).
pub struct UploadValidator {
    allowed_extensions: Vec<String>,
}

impl UploadValidator {
    pub fn new(allowed_extensions: &[String]) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .iter()
                .map(|extension| extension.to_lowercase())
                .collect(),
        }
    }

    /// Validate a client-supplied filename against the allow-set.
    pub fn validate(&self, filename: &str) -> Result<(), ValidationError> {
        if filename.is_empty() {
            return Err(ValidationError::MissingFilename);
        }

        let extension = extension_of(filename).ok_or(ValidationError::DisallowedType)?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::DisallowedType);
        }

        Ok(())
    }
}

/// Sanitize a filename to prevent path traversal and invalid characters.
///
/// Path components are stripped, characters outside `[A-Za-z0-9._-]` become
/// `_`, and the result is capped at 255 characters. Degenerate names fall
/// back to `"file"`.
pub fn sanitize_filename(filename: &str) -> Result<String, ValidationError> {
    const MAX_FILENAME_LENGTH: usize = 255;

    let path = Path::new(filename);
    let filename_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    if filename_only.contains("..") {
        return Err(ValidationError::InvalidFilename(
            "contains path traversal".to_string(),
        ));
    }

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> UploadValidator {
        UploadValidator::new(&[
            "csv".to_string(),
            "zip".to_string(),
            "json".to_string(),
            "xlsx".to_string(),
        ])
    }

    #[test]
    fn validate_accepts_allowed_extensions() {
        let validator = test_validator();
        assert!(validator.validate("data.csv").is_ok());
        assert!(validator.validate("bundle.zip").is_ok());
        assert!(validator.validate("DATA.CSV").is_ok()); // case insensitive
    }

    #[test]
    fn validate_rejects_disallowed_extension() {
        let validator = test_validator();
        assert_eq!(
            validator.validate("evil.exe"),
            Err(ValidationError::DisallowedType)
        );
    }

    #[test]
    fn validate_rejects_missing_extension() {
        let validator = test_validator();
        assert_eq!(
            validator.validate("noextension"),
            Err(ValidationError::DisallowedType)
        );
    }

    #[test]
    fn validate_rejects_empty_filename() {
        let validator = test_validator();
        assert_eq!(validator.validate(""), Err(ValidationError::MissingFilename));
    }

    #[test]
    fn validate_checks_last_extension_only() {
        let validator = test_validator();
        assert!(validator.validate("data.backup.csv").is_ok());
        assert_eq!(
            validator.validate("data.csv.exe"),
            Err(ValidationError::DisallowedType)
        );
    }

    #[test]
    fn sanitize_filename_accepts_valid_names() {
        assert_eq!(sanitize_filename("image.png").unwrap(), "image.png");
        assert_eq!(sanitize_filename("my-file_1.csv").unwrap(), "my-file_1.csv");
    }

    #[test]
    fn sanitize_filename_strips_path_components() {
        assert_eq!(sanitize_filename("../evil.csv").unwrap(), "evil.csv");
        assert_eq!(sanitize_filename("/tmp/data.csv").unwrap(), "data.csv");
        assert_eq!(sanitize_filename("a/b/c.json").unwrap(), "c.json");
    }

    #[test]
    fn sanitize_filename_replaces_unsafe_characters() {
        assert_eq!(
            sanitize_filename("weird name!.csv").unwrap(),
            "weird_name_.csv"
        );
    }

    #[test]
    fn sanitize_filename_rejects_bare_traversal() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("....").is_err());
    }

    #[test]
    fn sanitize_filename_falls_back_on_degenerate_names() {
        assert_eq!(sanitize_filename("!").unwrap(), "file");
    }
}
