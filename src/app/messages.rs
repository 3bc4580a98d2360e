use fltk::enums::Font;

use super::document::Side;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks, pane modify callbacks and deferred timers each send one
/// of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Pane events
    PaneEdited(Side),
    CursorMoved { line: i32, col: i32 },

    // Deferred coordination
    /// Clears the sync guard one event-loop turn after an external write,
    /// so the pane's own change notification is dispatched (and suppressed)
    /// first.
    ReleaseSyncGuard(Side),
    /// Debounced detection; stale generations are ignored.
    RunDetection(u64),
    /// Second phase of a format request, after the status bar painted.
    RunFormat,

    // File
    FileOpenInto(Side),
    FileSaveModified,
    FileQuit,

    // Edit / Tools
    ClearAll,
    FormatBoth,

    // View
    ToggleDarkMode,
    ToggleLineNumbers,
    ToggleWordWrap,
    ToggleHighlighting,

    // Format menu
    SetFont(Font),
    SetFontSize(i32),

    // Help
    ShowAbout,
}
