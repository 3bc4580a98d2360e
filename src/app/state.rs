use super::document::DiffDocument;
use super::language::Language;

/// Cursor position in the modified pane, 1-based, as shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPos {
    pub line: i32,
    pub col: i32,
}

impl Default for CursorPos {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

/// Canonical session state shared by the controllers.
///
/// Owns the buffer pair, the current language tag and the transient status
/// message. No FLTK types live here, which keeps the coordination logic
/// testable without a UI.
#[derive(Debug, Clone)]
pub struct AppState {
    pub document: DiffDocument,
    pub language: Language,
    pub status: String,
    pub cursor: CursorPos,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            document: DiffDocument::default(),
            language: Language::Plaintext,
            status: "Ready".to_string(),
            cursor: CursorPos::default(),
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Update the language tag. Returns true only when it actually changed,
    /// so callers can skip redundant notifications and re-highlights.
    pub fn set_language(&mut self, language: Language) -> bool {
        if self.language == language {
            return false;
        }
        self.language = language;
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.document.is_blank());
        assert_eq!(state.language, Language::Plaintext);
        assert_eq!(state.status, "Ready");
        assert_eq!(state.cursor, CursorPos { line: 1, col: 1 });
    }

    #[test]
    fn test_set_language_reports_change_once() {
        let mut state = AppState::new();
        assert!(state.set_language(Language::Json));
        assert!(!state.set_language(Language::Json));
        assert!(state.set_language(Language::Plaintext));
    }
}
