//! Datalens Storage Library
//!
//! Filesystem persistence for uploaded files and their summary documents.
//! The `Storage` trait is the seam; `LocalStorage` is the only backend this
//! system needs (everything lives in two local directories).

pub mod local;
pub mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
