/// Image ingestion module
///
/// This module handles:
/// - Cleaning paths delivered by drop events and filtering picker formats
/// - Decoding, color normalization, downscaling and JPEG re-encoding
/// - The full drop-to-gallery submission (ingest, then append)

pub mod path;
pub mod process;
pub mod submit;

pub use path::{clean_drop_path, is_supported_extension};
pub use process::IngestOptions;
pub use submit::submit;
