/// One of the two panes in the diff view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left pane.
    Original,
    /// Right pane.
    Modified,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Original, Side::Modified];

    /// Index into per-side arrays (original = 0, modified = 1).
    pub fn index(&self) -> usize {
        match self {
            Side::Original => 0,
            Side::Modified => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Side::Original => "original",
            Side::Modified => "modified",
        }
    }
}

/// The canonical buffer pair owned by the application.
///
/// Both fields are always valid strings; the empty string is the canonical
/// "empty" value. The live FLTK buffers are kept consistent with this pair
/// by the sync controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffDocument {
    pub original: String,
    pub modified: String,
}

impl DiffDocument {
    pub fn new(original: impl Into<String>, modified: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            modified: modified.into(),
        }
    }

    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Original => &self.original,
            Side::Modified => &self.modified,
        }
    }

    pub fn set_side(&mut self, side: Side, text: impl Into<String>) {
        match side {
            Side::Original => self.original = text.into(),
            Side::Modified => self.modified = text.into(),
        }
    }

    /// Text used for language detection: the modified pane wins, the
    /// original pane is the fallback only when the modified pane is the
    /// empty string. A whitespace-only modified pane is still the
    /// effective text (and resolves to plaintext downstream).
    pub fn effective_text(&self) -> &str {
        if self.modified.is_empty() {
            &self.original
        } else {
            &self.modified
        }
    }

    pub fn is_blank(&self) -> bool {
        self.original.trim().is_empty() && self.modified.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.original.clear();
        self.modified.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_strings() {
        let doc = DiffDocument::default();
        assert_eq!(doc.original, "");
        assert_eq!(doc.modified, "");
        assert!(doc.is_blank());
    }

    #[test]
    fn test_effective_text_prefers_modified() {
        let doc = DiffDocument::new("left", "right");
        assert_eq!(doc.effective_text(), "right");
    }

    #[test]
    fn test_effective_text_falls_back_to_original_only_when_empty() {
        let doc = DiffDocument::new("left", "");
        assert_eq!(doc.effective_text(), "left");
    }

    #[test]
    fn test_whitespace_modified_is_still_the_effective_text() {
        let doc = DiffDocument::new("{\"a\": 1}", "   \n");
        assert_eq!(doc.effective_text(), "   \n");
    }

    #[test]
    fn test_blank_detects_whitespace_only() {
        let doc = DiffDocument::new("  \t", "\n\n");
        assert!(doc.is_blank());
        assert!(!DiffDocument::new("x", "").is_blank());
    }

    #[test]
    fn test_side_accessors() {
        let mut doc = DiffDocument::default();
        doc.set_side(Side::Original, "a");
        doc.set_side(Side::Modified, "b");
        assert_eq!(doc.side(Side::Original), "a");
        assert_eq!(doc.side(Side::Modified), "b");
    }
}
