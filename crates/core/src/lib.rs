//! Core domain types and pattern matching engine
//! for searching text within presentations.

pub mod error;
pub mod pattern;
pub mod types;

pub use error::{Error, Result};
pub use pattern::{Highlight, MatchMode, Matcher, PatternSpec};
pub use types::MatchRecord;
