use log::debug;

use super::document::{DiffDocument, Side};
use super::editor::DiffPanes;
use super::messages::Message;
use super::scheduler::Scheduler;
use super::state::AppState;

/// Per-side re-entrancy guard.
///
/// `ApplyingExternal` marks the window between a programmatic pane write and
/// the next event-loop turn. A pane change notification arriving in that
/// window is the echo of our own write and must not be propagated back into
/// the canonical document, which would otherwise cause cursor jumps or an
/// update storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncGuard {
    Idle,
    ApplyingExternal,
}

/// Keeps the two live pane buffers and the canonical `DiffDocument`
/// consistent in both directions.
///
/// Local edits flow pane -> document; external updates (formatting, clear,
/// file open) flow document -> pane. At most one direction is in flight per
/// side at any instant, serialized by the guard.
pub struct SyncController {
    guards: [SyncGuard; 2],
    /// Last value this controller saw per side, from either direction.
    last_seen: [String; 2],
}

impl SyncController {
    pub fn new() -> Self {
        Self {
            guards: [SyncGuard::Idle, SyncGuard::Idle],
            last_seen: [String::new(), String::new()],
        }
    }

    pub fn guard(&self, side: Side) -> SyncGuard {
        self.guards[side.index()]
    }

    /// Handle a change notification from one pane.
    ///
    /// Reads both panes and updates the canonical pair, unless the edited
    /// side is mid-external-update, in which case the notification is the
    /// echo of a programmatic write and is dropped. Returns whether the
    /// edit was propagated.
    pub fn on_pane_edit(
        &mut self,
        side: Side,
        panes: &dyn DiffPanes,
        state: &mut AppState,
    ) -> bool {
        if self.guards[side.index()] == SyncGuard::ApplyingExternal {
            debug!("suppressed echo edit on {} pane", side.label());
            return false;
        }

        let original = panes.text(Side::Original);
        let modified = panes.text(Side::Modified);
        self.last_seen[Side::Original.index()] = original.clone();
        self.last_seen[Side::Modified.index()] = modified.clone();
        state.document = DiffDocument::new(original, modified);
        true
    }

    /// Push an externally changed buffer pair into the panes.
    ///
    /// Each side is handled independently: a pane is rewritten only when the
    /// new value differs both from the last value seen on that side and from
    /// the pane's live text. Cursor restoration is best-effort (skipped when
    /// the pane never had a cursor, clamped to the new length otherwise).
    /// The guard is cleared one event-loop turn later via
    /// `Message::ReleaseSyncGuard` so the synchronous change notification
    /// fired by the write is suppressed first.
    pub fn apply_external(
        &mut self,
        document: &DiffDocument,
        panes: &mut dyn DiffPanes,
        scheduler: &dyn Scheduler,
    ) {
        for side in Side::BOTH {
            let new_text = document.side(side);
            if new_text == self.last_seen[side.index()] || new_text == panes.text(side) {
                continue;
            }

            self.guards[side.index()] = SyncGuard::ApplyingExternal;
            let cursor = panes.cursor(side);
            panes.set_text(side, new_text);
            if let Some(pos) = cursor {
                panes.set_cursor(side, pos.min(new_text.len() as i32));
            }
            self.last_seen[side.index()] = new_text.to_string();
            scheduler.send_after(0.0, Message::ReleaseSyncGuard(side));
        }
    }

    /// Deferred guard clear, dispatched from the event loop.
    pub fn release_guard(&mut self, side: Side) {
        self.guards[side.index()] = SyncGuard::Idle;
    }
}

impl Default for SyncController {
    fn default() -> Self {
        Self::new()
    }
}
