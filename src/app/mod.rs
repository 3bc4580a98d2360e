//! Application layer: coordination between the two diff panes, the
//! canonical document, and the external collaborators.
//!
//! # Structure
//!
//! - `document`, `language`, `state` - core data (buffer pair, language tag)
//! - `sync_controller` - bidirectional pane/document sync with re-entrancy guard
//! - `detect_controller` - debounced language auto-detection
//! - `format_controller` - explicit two-pane reformat
//! - `services/` - classifier, formatter and diff-stat backends
//! - `syntax/` - syntect highlighting for the panes
//! - `editor`, `scheduler` - seams toward the FLTK layer

pub mod detect_controller;
pub mod document;
pub mod editor;
pub mod error;
pub mod format_controller;
pub mod language;
pub mod messages;
pub mod scheduler;
pub mod services;
pub mod settings;
pub mod state;
pub mod sync_controller;
pub mod syntax;
pub mod text_ops;

// Re-exports for convenient external access
pub use document::{DiffDocument, Side};
pub use error::{AppError, ClassifyError, FormatError};
pub use language::Language;
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, ThemeMode};
pub use state::AppState;
