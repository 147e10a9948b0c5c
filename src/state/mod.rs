/// State management module
/// 
/// This module handles everything persisted on disk, including:
/// - The gallery root and its on-disk layout (store.rs)
/// - Shared data structures passed between pipeline and UI (data.rs)

pub mod store;
pub mod data;

pub use data::{AppendOutcome, StoredImage, Submission};
pub use store::GalleryStore;
