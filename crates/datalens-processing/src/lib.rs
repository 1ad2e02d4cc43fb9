//! Datalens Processing Library
//!
//! Upload validation and the extractors that turn a persisted file into a
//! `ProcessingResult`. Extractor selection is a closed enumeration over file
//! kinds; see [`kind::FileKind`].

pub mod archive;
pub mod document;
pub mod error;
pub mod kind;
pub mod tabular;
pub mod traits;
pub mod validator;

pub use archive::ZipExtractor;
pub use document::JsonExtractor;
pub use error::ExtractError;
pub use kind::FileKind;
pub use tabular::CsvExtractor;
pub use traits::Extractor;
pub use validator::{sanitize_filename, UploadValidator, ValidationError};
