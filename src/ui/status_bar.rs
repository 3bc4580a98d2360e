use fltk::{frame::Frame, prelude::*};

use crate::app::services::diff_stats::DiffStats;
use crate::app::state::AppState;

/// Rebuild the status bar label from current state.
///
/// Mirrors the layout of the classic editor status line: diff stats, cursor
/// position, encoding, language, and the transient status message.
pub fn refresh(frame: &mut Frame, state: &AppState, stats: DiffStats) {
    let language = if state.language == crate::app::Language::Plaintext {
        "Auto Detect...".to_string()
    } else {
        state.language.as_str().to_uppercase()
    };

    let label = format!(
        "  {}  |  Ln {}, Col {}  |  UTF-8  |  {}  |  {}",
        stats, state.cursor.line, state.cursor.col, language, state.status
    );
    frame.set_label(&label);
    frame.redraw();
}
