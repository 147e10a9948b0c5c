use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::GalleryError;
use crate::gallery::{template, CARD_OPEN_TAG};

/// Name of the managed image directory under the root
pub const IMAGES_DIR: &str = "images";

/// Name of the gallery document under the root
pub const INDEX_FILE: &str = "index.html";

/// The GalleryStore owns the on-disk layout of one gallery.
/// It holds the root directory that contains the managed image
/// directory and the gallery document. Every ingest and append
/// goes through a store handle instead of ambient paths.
#[derive(Clone, PartialEq, Eq)]
pub struct GalleryStore {
    root: PathBuf,
}

impl GalleryStore {
    /// Create a handle for a gallery rooted at `root` (no I/O).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a handle and make sure the layout exists on disk.
    ///
    /// - `<root>/images/` is created if missing
    /// - `<root>/index.html` is written from the base template if missing
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, GalleryError> {
        let store = Self::new(root);
        store.ensure_layout()?;
        Ok(store)
    }

    /// Create the images directory and the base document if they don't exist.
    /// An existing document is never overwritten.
    pub fn ensure_layout(&self) -> Result<(), GalleryError> {
        let images_dir = self.images_dir();
        fs::create_dir_all(&images_dir).map_err(|source| GalleryError::Io {
            path: images_dir.clone(),
            source,
        })?;

        self.ensure_document()?;

        info!("📁 Gallery ready at {}", self.root.display());
        Ok(())
    }

    /// Write the base template if the gallery document is missing.
    /// Returns true when a new document was created.
    pub fn ensure_document(&self) -> Result<bool, GalleryError> {
        let index_path = self.index_path();
        if index_path.exists() {
            return Ok(false);
        }

        fs::write(&index_path, template::BASE_TEMPLATE).map_err(|source| GalleryError::Io {
            path: index_path.clone(),
            source,
        })?;

        info!("📄 Created gallery document {}", index_path.display());
        Ok(true)
    }

    /// The gallery root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding processed images
    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    /// Path to the gallery document
    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// Full path of a stored image by filename
    pub fn image_path(&self, filename: &str) -> PathBuf {
        self.images_dir().join(filename)
    }

    /// Count the cards currently in the gallery document.
    /// A missing document has zero cards.
    pub fn card_count(&self) -> Result<usize, GalleryError> {
        let index_path = self.index_path();
        if !index_path.exists() {
            return Ok(0);
        }

        let content = fs::read_to_string(&index_path).map_err(|source| GalleryError::Io {
            path: index_path.clone(),
            source,
        })?;

        Ok(content.matches(CARD_OPEN_TAG).count())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for GalleryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryStore")
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_does_no_io() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::new(dir.path());

        assert!(!store.images_dir().exists());
        assert!(!store.index_path().exists());
        assert_eq!(store.root(), dir.path());
    }

    #[test]
    fn test_open_creates_layout() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::open(dir.path()).unwrap();

        assert!(store.images_dir().is_dir());
        let content = fs::read_to_string(store.index_path()).unwrap();
        assert_eq!(content, template::BASE_TEMPLATE);
        assert_eq!(store.card_count().unwrap(), 0);
    }

    #[test]
    fn test_open_keeps_existing_document() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(INDEX_FILE), "hand edited").unwrap();

        let store = GalleryStore::open(dir.path()).unwrap();

        let content = fs::read_to_string(store.index_path()).unwrap();
        assert_eq!(content, "hand edited");
        assert!(!store.ensure_document().unwrap());
    }

    #[test]
    fn test_paths() {
        let store = GalleryStore::new("/srv/gallery");

        assert_eq!(store.images_dir(), PathBuf::from("/srv/gallery/images"));
        assert_eq!(store.index_path(), PathBuf::from("/srv/gallery/index.html"));
        assert_eq!(
            store.image_path("img_20240101_000000.jpg"),
            PathBuf::from("/srv/gallery/images/img_20240101_000000.jpg")
        );
    }

    #[test]
    fn test_card_count_without_document() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::new(dir.path());

        assert_eq!(store.card_count().unwrap(), 0);
    }
}
