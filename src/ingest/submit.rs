use std::path::Path;
use tracing::info;

use super::process::{ingest_image, IngestOptions};
use crate::error::SubmitError;
use crate::gallery::append_card;
use crate::state::{GalleryStore, Submission};

/// Run one drop-to-gallery submission: validate the prompt, store the
/// image, then add its card to the gallery.
///
/// A blank prompt stops everything before the image is touched.
pub fn submit(
    store: &GalleryStore,
    source: &Path,
    prompt: &str,
    options: IngestOptions,
) -> Result<Submission, SubmitError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(SubmitError::EmptyPrompt);
    }

    let image = ingest_image(store, source, options)?;
    let outcome = append_card(store, &image.filename, prompt)?;

    info!("✅ {} -> {} ({:?})", source.display(), image.filename, outcome);
    Ok(Submission { image, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use crate::state::AppendOutcome;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, GalleryStore, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::open(dir.path().join("gallery")).unwrap();
        let source = dir.path().join("input.png");
        RgbImage::from_pixel(1600, 900, Rgb([0, 128, 255])).save(&source).unwrap();
        (dir, store, source)
    }

    #[test]
    fn test_submit_stores_image_and_card() {
        let (_dir, store, source) = setup();

        let submission = submit(&store, &source, "  neon city, rain  ", IngestOptions::default()).unwrap();

        assert_eq!(submission.outcome, AppendOutcome::Inserted);
        assert!(submission.image.path.exists());
        assert_eq!((submission.image.width, submission.image.height), (1080, 607));

        let content = fs::read_to_string(store.index_path()).unwrap();
        assert!(content.contains(&format!(r#"src="images/{}""#, submission.image.filename)));
        assert!(content.contains("copyPrompt(this, 'neon city, rain')"));
    }

    #[test]
    fn test_blank_prompt_does_nothing() {
        let (_dir, store, source) = setup();

        for prompt in ["", "   ", "\n\t "] {
            let err = submit(&store, &source, prompt, IngestOptions::default()).unwrap_err();
            assert!(matches!(err, SubmitError::EmptyPrompt));
        }

        assert_eq!(fs::read_dir(store.images_dir()).unwrap().count(), 0);
        assert_eq!(store.card_count().unwrap(), 0);
    }

    #[test]
    fn test_failed_ingest_adds_no_card() {
        let (dir, store, _source) = setup();
        let broken = dir.path().join("broken.webp");
        fs::write(&broken, b"RIFF....nope").unwrap();

        let err = submit(&store, &broken, "prompt", IngestOptions::default()).unwrap_err();

        assert!(matches!(err, SubmitError::Ingest(IngestError::Decode { .. })));
        assert_eq!(store.card_count().unwrap(), 0);
    }

    #[test]
    fn test_marker_missing_still_stores_image() {
        let (_dir, store, source) = setup();
        fs::write(store.index_path(), "<html>custom page</html>").unwrap();

        let submission = submit(&store, &source, "kept", IngestOptions::default()).unwrap();

        assert_eq!(submission.outcome, AppendOutcome::MarkerMissing);
        assert!(submission.image.path.exists());
        assert_eq!(
            fs::read_to_string(store.index_path()).unwrap(),
            "<html>custom page</html>"
        );
    }
}
