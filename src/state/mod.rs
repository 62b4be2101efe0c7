/// State management module
///
/// This module holds everything the form records for the current session:
/// - Shared data structures (data.rs)
/// - The in-memory roster and its validation (roster.rs)

pub mod data;
pub mod roster;

pub use data::{format_grade, StudentRecord, Summary};
pub use roster::Roster;
