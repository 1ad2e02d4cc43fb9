//! Common utilities for the upload handler

use axum::extract::Multipart;
use bytes::Bytes;
use datalens_core::AppError;

/// One file pulled from the multipart form, name exactly as the client sent
/// it. Exists only for the duration of request handling.
pub struct UploadItem {
    pub filename: String,
    pub data: Bytes,
}

/// Collect every field named `files` from the multipart form, in arrival
/// order. Fields with other names are skipped; a field without a filename is
/// kept so it can fail per-item downstream.
pub async fn collect_upload_items(mut multipart: Multipart) -> Result<Vec<UploadItem>, AppError> {
    let mut items = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if field_name != "files" {
            continue;
        }

        let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        items.push(UploadItem { filename, data });
    }

    Ok(items)
}

/// Name of the summary document for a stored upload: prefix plus the first
/// dot-segment of the stored name.
pub fn summary_key(sanitized: &str) -> String {
    let stem = sanitized.split('.').next().unwrap_or(sanitized);
    format!("processed_{}.json", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_key_uses_first_dot_segment() {
        assert_eq!(summary_key("data.csv"), "processed_data.json");
        assert_eq!(summary_key("data.backup.csv"), "processed_data.json");
        assert_eq!(summary_key("file"), "processed_file.json");
    }
}
