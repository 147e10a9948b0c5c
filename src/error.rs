//! Error types for ingestion, gallery updates and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning a source image into a stored JPEG
#[derive(Error, Debug)]
pub enum IngestError {
    /// The source could not be opened, or the output could not be created
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not an image we can decode (corrupt or unsupported)
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Downscaling would produce an empty image
    #[error("cannot resize {width}x{height} to {max_width}px wide: height would be zero")]
    Resize {
        width: u32,
        height: u32,
        max_width: u32,
    },

    /// The JPEG encoder rejected the image
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Failure while reading or rewriting the gallery document
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("gallery I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a full drop-to-gallery submission
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Nothing to attach to the image
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

/// Failure while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
