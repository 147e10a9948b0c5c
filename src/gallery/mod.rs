/// Static HTML gallery module
///
/// This module handles:
/// - The base page template (template.rs)
/// - Escaping prompts and rendering card fragments (card.rs)
/// - Inserting cards into the persisted document (append.rs)

pub mod template;
pub mod card;
pub mod append;

pub use append::append_card;

/// New cards are inserted right after this substring
pub const MARKER: &str = r#"<div class="gallery-grid">"#;

/// Opening tag shared by every card fragment
pub const CARD_OPEN_TAG: &str = r#"<div class="card""#;
