//! External collaborators behind trait seams: language classification,
//! code formatting, and diff statistics. The controllers only see the
//! traits; the real backends live here.

pub mod detect;
pub mod diff_stats;
pub mod format;
