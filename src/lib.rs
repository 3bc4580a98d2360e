//! FerrisDiff
//!
//! A fast side-by-side code diff editor built with Rust and FLTK.
//!
//! This library provides:
//! - Bidirectional sync between the two editable panes and the canonical
//!   buffer pair, with a re-entrancy guard
//! - Debounced content-based language auto-detection
//! - One-shot reformatting of both panes with a fixed style
//! - Syntect-based highlighting and diff statistics for the status bar

pub mod app;
pub mod ui;

pub use app::{AppSettings, AppState, DiffDocument, Language, Message, Side};
