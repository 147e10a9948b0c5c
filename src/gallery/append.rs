//! Read-modify-write of the gallery document.

use std::fs;
use tracing::{info, warn};

use super::card::{insert_card, render_card};
use crate::error::GalleryError;
use crate::state::{AppendOutcome, GalleryStore};

/// Append a card for `filename` with `prompt` to the store's gallery.
///
/// The document is created from the base template first if it is missing.
/// The whole file is read, the card is inserted after the marker, and the
/// whole file is written back. Without a marker the file is left as-is and
/// `AppendOutcome::MarkerMissing` is returned.
pub fn append_card(
    store: &GalleryStore,
    filename: &str,
    prompt: &str,
) -> Result<AppendOutcome, GalleryError> {
    store.ensure_document()?;

    let index_path = store.index_path();
    let content = fs::read_to_string(&index_path).map_err(|source| GalleryError::Io {
        path: index_path.clone(),
        source,
    })?;

    let card = render_card(filename, prompt);
    let Some(updated) = insert_card(&content, &card) else {
        warn!(
            "⚠️  No gallery marker in {}, card for {} not added",
            index_path.display(),
            filename
        );
        return Ok(AppendOutcome::MarkerMissing);
    };

    fs::write(&index_path, updated).map_err(|source| GalleryError::Io {
        path: index_path.clone(),
        source,
    })?;

    info!("🖼️  Added card for {}", filename);
    Ok(AppendOutcome::Inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::template::BASE_TEMPLATE;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_missing_document() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::new(dir.path());

        let outcome = append_card(&store, "img_1.jpg", "first").unwrap();

        assert_eq!(outcome, AppendOutcome::Inserted);
        let content = fs::read_to_string(store.index_path()).unwrap();
        assert!(content.contains(r#"src="images/img_1.jpg""#));
        assert_eq!(store.card_count().unwrap(), 1);
    }

    #[test]
    fn test_append_preserves_prior_cards_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::open(dir.path()).unwrap();

        append_card(&store, "img_a.jpg", "alpha").unwrap();
        append_card(&store, "img_b.jpg", "beta").unwrap();
        append_card(&store, "img_c.jpg", "gamma").unwrap();

        let content = fs::read_to_string(store.index_path()).unwrap();
        let a = content.find("img_a.jpg").unwrap();
        let b = content.find("img_b.jpg").unwrap();
        let c = content.find("img_c.jpg").unwrap();
        assert!(c < b && b < a);
        assert_eq!(store.card_count().unwrap(), 3);

        // Everything outside the grid is still the template
        let (head, _) = BASE_TEMPLATE.split_once(crate::gallery::MARKER).unwrap();
        assert!(content.starts_with(head));
        assert!(content.ends_with("</html>"));
    }

    #[test]
    fn test_append_escapes_quotes_but_not_markup() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::open(dir.path()).unwrap();

        append_card(&store, "img_q.jpg", r#"say "hi" it's <script>x</script>"#).unwrap();

        let content = fs::read_to_string(store.index_path()).unwrap();
        assert!(content.contains("say &quot;hi&quot; it&#39;s <script>x</script>"));
    }

    #[test]
    fn test_append_without_marker_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::new(dir.path());
        let original = "<html><body>no grid here</body></html>";
        fs::write(store.index_path(), original).unwrap();

        let outcome = append_card(&store, "img_x.jpg", "lost").unwrap();

        assert_eq!(outcome, AppendOutcome::MarkerMissing);
        assert_eq!(fs::read_to_string(store.index_path()).unwrap(), original);
    }

    #[test]
    fn test_append_into_missing_root_fails_with_io() {
        let dir = TempDir::new().unwrap();
        let store = GalleryStore::new(dir.path().join("does").join("not").join("exist"));

        let err = append_card(&store, "img.jpg", "p").unwrap_err();
        assert!(matches!(err, GalleryError::Io { .. }));
    }
}
