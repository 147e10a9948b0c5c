//! Card fragments and marker insertion.

use super::MARKER;

/// Escape a prompt for the single-quoted JS string inside `onclick="..."`.
///
/// Only `"` and `'` are replaced. `<`, `&` and `\` pass through verbatim;
/// existing galleries depend on this exact encoding.
pub fn escape_prompt(prompt: &str) -> String {
    prompt.replace('"', "&quot;").replace('\'', "&#39;")
}

/// Render the card fragment for one stored image and its prompt
pub fn render_card(filename: &str, prompt: &str) -> String {
    let clean_prompt = escape_prompt(prompt);
    format!(
        r#"
    <div class="card" onclick="copyPrompt(this, '{clean_prompt}')">
        <img src="images/{filename}" alt="Prompt Image" loading="lazy">
        <div class="overlay">Tap to Copy</div>
    </div>
    "#
    )
}

/// Insert a card right after the first marker in `document`.
///
/// Returns `None` when the marker is absent. Cards land before every
/// existing card, so the page reads newest-first.
pub fn insert_card(document: &str, card: &str) -> Option<String> {
    let at = document.find(MARKER)? + MARKER.len();

    let mut out = String::with_capacity(document.len() + card.len() + 1);
    out.push_str(&document[..at]);
    out.push('\n');
    out.push_str(card);
    out.push_str(&document[at..]);
    Some(out)
}
