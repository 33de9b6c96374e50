//! Text preparation for speech playback.

/// Markdown marker characters removed before text is handed to the engine.
const MARKUP_CHARS: [char; 4] = ['*', '#', '_', '`'];

/// Strips markdown marker characters and surrounding whitespace.
///
/// Reports arrive as markdown; spoken text should not vocalize the
/// formatting. Only the marker characters are removed, never the words
/// between them: `` "# Title *bold* `code`" `` becomes `"Title bold code"`.
pub fn strip_markup(text: &str) -> String {
    text.chars()
        .filter(|c| !MARKUP_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_owned()
}
