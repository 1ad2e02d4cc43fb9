//! Test helpers: build AppState and router against temp directories.
//!
//! Run from workspace root: `cargo test -p datalens-api` or
//! `cargo test -p datalens-api --test upload_test`.

#![allow(dead_code)] // each test binary uses a subset of these helpers

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use datalens_api::setup::routes;
use datalens_api::state::AppState;
use datalens_core::AppConfig;
use datalens_storage::LocalStorage;
use tempfile::TempDir;

/// Test application: server plus the directories it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub processed_dir: PathBuf,
    _temp_dir: TempDir,
}

pub fn test_config(root: &Path) -> AppConfig {
    AppConfig {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        upload_dir: root.join("uploads").to_string_lossy().into_owned(),
        processed_dir: root.join("processed").to_string_lossy().into_owned(),
        max_upload_bytes: 50 * 1024 * 1024,
        allowed_extensions: vec![
            "csv".to_string(),
            "zip".to_string(),
            "json".to_string(),
            "xlsx".to_string(),
        ],
    }
}

/// Setup test app with isolated upload/processed directories.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config = test_config(temp_dir.path());
    build_test_app(config, temp_dir).await
}

/// Same as `setup_test_app`, with a custom request body cap.
pub async fn setup_test_app_with_max_upload(max_upload_bytes: usize) -> TestApp {
    let temp_dir = TempDir::new().expect("create temp dir");
    let mut config = test_config(temp_dir.path());
    config.max_upload_bytes = max_upload_bytes;
    build_test_app(config, temp_dir).await
}

async fn build_test_app(config: AppConfig, temp_dir: TempDir) -> TestApp {
    let uploads = LocalStorage::new(&config.upload_dir)
        .await
        .expect("create upload dir");
    let processed = LocalStorage::new(&config.processed_dir)
        .await
        .expect("create processed dir");

    let upload_dir = PathBuf::from(&config.upload_dir);
    let processed_dir = PathBuf::from(&config.processed_dir);

    let state = Arc::new(AppState {
        config: config.clone(),
        uploads: Arc::new(uploads),
        processed: Arc::new(processed),
    });

    let router = routes::setup_routes(&config, state).expect("build router");
    let server = TestServer::new(router).expect("start test server");

    TestApp {
        server,
        upload_dir,
        processed_dir,
        _temp_dir: temp_dir,
    }
}

/// One `files` part carrying the given bytes.
pub fn file_part(filename: &str, bytes: &[u8]) -> Part {
    Part::bytes(bytes.to_vec()).file_name(filename)
}

/// Multipart form with one `files` part per entry.
pub fn files_form(entries: &[(&str, &[u8])]) -> MultipartForm {
    let mut form = MultipartForm::new();
    for (filename, bytes) in entries {
        form = form.add_part("files", file_part(filename, bytes));
    }
    form
}

/// Build an in-memory zip archive from (entry name, contents) pairs.
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::write::{FileOptions, ZipWriter};

    let mut buffer = Vec::new();
    {
        let mut writer = ZipWriter::new(Cursor::new(&mut buffer));
        let options = FileOptions::default();
        for (name, contents) in entries {
            writer.start_file(*name, options).expect("start zip entry");
            writer
                .write_all(contents.as_bytes())
                .expect("write zip entry");
        }
        writer.finish().expect("finalize zip");
    }
    buffer
}
