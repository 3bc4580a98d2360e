use log::debug;

use super::document::{DiffDocument, Side};
use super::editor::DiffPanes;
use super::messages::Message;
use super::scheduler::Scheduler;
use super::services::format::CodeFormatter;
use super::state::AppState;
use super::sync_controller::SyncController;

/// Explicit, user-triggered reformat of both panes.
///
/// Runs in two phases: `request` flips the in-progress flag and defers the
/// real work one event-loop turn (`Message::RunFormat`) so the
/// `Formatting...` status can paint first. Requests arriving while the flag
/// is set are ignored. Both sides must format successfully together; on any
/// failure neither pane is touched.
pub struct FormatController {
    in_progress: bool,
}

impl FormatController {
    pub fn new() -> Self {
        Self { in_progress: false }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Phase one. Returns false for ignored re-entrant requests.
    pub fn request(&mut self, state: &mut AppState, scheduler: &dyn Scheduler) -> bool {
        if self.in_progress {
            debug!("format request ignored: already formatting");
            return false;
        }
        self.in_progress = true;
        state.set_status("Formatting...");
        scheduler.send_after(0.0, Message::RunFormat);
        true
    }

    /// Phase two: format both canonical texts and, on success, push the new
    /// pair through the sync controller as one external update.
    ///
    /// Blank sides pass through unchanged without invoking the formatter.
    /// Failure policy: surface the error as a status message and leave both
    /// buffers exactly as they were. The in-progress flag clears regardless
    /// of outcome. Returns whether the format was applied.
    pub fn run(
        &mut self,
        state: &mut AppState,
        sync: &mut SyncController,
        panes: &mut dyn DiffPanes,
        scheduler: &dyn Scheduler,
        formatter: &dyn CodeFormatter,
    ) -> bool {
        let language = state.language;
        let result = Side::BOTH.iter().try_fold(
            DiffDocument::default(),
            |mut acc, &side| -> Result<DiffDocument, crate::app::error::FormatError> {
                let text = state.document.side(side);
                let formatted = if text.trim().is_empty() {
                    text.to_string()
                } else {
                    formatter.format(text, language)?
                };
                acc.set_side(side, formatted);
                Ok(acc)
            },
        );

        self.in_progress = false;

        match result {
            Ok(formatted) => {
                state.document = formatted;
                sync.apply_external(&state.document, panes, scheduler);
                state.set_status(format!("Formatted ({})", language));
                true
            }
            Err(e) => {
                state.set_status(e.to_string());
                false
            }
        }
    }
}

impl Default for FormatController {
    fn default() -> Self {
        Self::new()
    }
}
