use log::{debug, warn};

use super::language::Language;
use super::messages::Message;
use super::scheduler::Scheduler;
use super::services::detect::LanguageClassifier;
use super::state::AppState;

/// Quiet period after the last edit before classification runs.
pub const DETECT_QUIET_SECS: f64 = 1.2;

/// Debounced language auto-detection.
///
/// Every edit supersedes the previous pending detection: scheduling bumps a
/// generation counter, and a `RunDetection` message carrying a stale
/// generation is dropped. Only the newest pending classification ever fires,
/// on whatever content is current at that point.
pub struct DetectController {
    generation: u64,
}

impl DetectController {
    pub fn new() -> Self {
        Self { generation: 0 }
    }

    /// Cancel-and-reschedule: void any pending detection and arm a new one
    /// for one quiet period from now.
    pub fn schedule(&mut self, scheduler: &dyn Scheduler) {
        self.generation = self.generation.wrapping_add(1);
        scheduler.send_after(DETECT_QUIET_SECS, Message::RunDetection(self.generation));
    }

    /// Whether `generation` is the newest scheduled detection. The dispatch
    /// loop uses this to re-highlight once per settled quiet period even
    /// when the language tag did not change.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Run the classification scheduled as `generation`, if it is still the
    /// newest one. Returns true when the language tag changed.
    pub fn run(
        &mut self,
        generation: u64,
        state: &mut AppState,
        classifier: &dyn LanguageClassifier,
    ) -> bool {
        if !self.is_current(generation) {
            debug!("dropping superseded detection (gen {})", generation);
            return false;
        }

        let text = state.document.effective_text();
        if text.trim().is_empty() {
            return state.set_language(Language::Plaintext);
        }

        let detected = match classifier.classify(text) {
            Ok(label) => Language::from_raw_label(&label),
            Err(e) => {
                warn!("language detection failed: {}", e);
                Language::Plaintext
            }
        };

        let changed = state.set_language(detected);
        if changed {
            state.set_status(format!("Detected: {}", detected.as_str().to_uppercase()));
        }
        changed
    }
}

impl Default for DetectController {
    fn default() -> Self {
        Self::new()
    }
}
