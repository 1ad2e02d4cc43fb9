//! Application state
//!
//! One immutable state object shared by every handler: the configuration and
//! the two blob stores (raw uploads, processed summaries). There is no other
//! shared mutable state in this system.

use std::sync::Arc;

use datalens_core::AppConfig;
use datalens_storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    /// Store for the raw uploaded bytes.
    pub uploads: Arc<dyn Storage>,
    /// Store for the per-file summary JSON documents.
    pub processed: Arc<dyn Storage>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
