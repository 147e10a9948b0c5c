//! Shared data structures for the application state
//! 
//! These structs represent the data model that flows between
//! the ingest/gallery layer and the UI layer.

use std::path::PathBuf;

/// An image written into the managed directory
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    /// Filename only (e.g., "img_20240101_120000.jpg")
    pub filename: String,
    /// Full path of the written JPEG
    pub path: PathBuf,
    /// Output width after any downscale
    pub width: u32,
    /// Output height after any downscale
    pub height: u32,
}

/// What happened to the gallery document on append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The card was placed right after the marker
    Inserted,
    /// The document has no marker; it was left untouched
    MarkerMissing,
}

/// Result of one drop-to-gallery submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub image: StoredImage,
    pub outcome: AppendOutcome,
}
