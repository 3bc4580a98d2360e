use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Convert a byte offset into 1-based (line, column) for the status bar.
///
/// The column counts characters, not bytes, so multi-byte input does not
/// inflate it. Offsets past the end clamp to the last position.
pub fn offset_to_line_col(text: &str, offset: usize) -> (i32, i32) {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &text[..offset];
    let line = before.matches('\n').count() as i32 + 1;
    let col = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() as i32 + 1,
        None => before.chars().count() as i32 + 1,
    };
    (line, col)
}
