pub const DEFAULT_PREVIEW_CHARS: usize = 500;
pub const TRUNCATION_MARKER: &str = "...";

/// First `max_chars` characters of `text`, with a marker when anything was cut.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{TRUNCATION_MARKER}", &text[..byte_index]),
        None => text.to_string(),
    }
}
