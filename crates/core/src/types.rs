//! Domain types for reported matches.

use serde::{Deserialize, Serialize};

/// One reported match with its file and slide context.
///
/// The highlight decomposition splits the text run around the match so a
/// sink can render `prefix`, `matched`, and `suffix` differently. Joining
/// the three parts reconstructs the original run exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Path of the presentation the match was found in.
    pub file: String,

    /// 1-based slide number within the presentation.
    pub slide: usize,

    /// Run text before the match.
    pub prefix: String,

    /// The matched text, in its original casing.
    pub matched: String,

    /// Run text after the match.
    pub suffix: String,
}

impl MatchRecord {
    /// Create a record from a highlight decomposition.
    pub fn new(
        file: impl Into<String>,
        slide: usize,
        prefix: impl Into<String>,
        matched: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            slide,
            prefix: prefix.into(),
            matched: matched.into(),
            suffix: suffix.into(),
        }
    }

    /// Reassemble the text run this match was found in.
    pub fn reconstruct_run(&self) -> String {
        format!("{}{}{}", self.prefix, self.matched, self.suffix)
    }
}
