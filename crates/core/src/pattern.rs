//! Pattern matching engine for extracted text runs.
//!
//! A [`PatternSpec`] describes what to search for; [`Matcher::compile`]
//! turns it into a reusable engine that is compiled once per invocation and
//! shared read-only across every file, slide, and run. Pattern compilation
//! failures surface here, before any file is opened.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// How the pattern text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Plain substring search.
    Literal,
    /// Regular expression search.
    Regex,
}

/// The matching configuration for one invocation.
#[derive(Debug, Clone)]
pub struct PatternSpec {
    /// Interpretation of `pattern`.
    pub mode: MatchMode,

    /// Ignore case distinctions when matching.
    pub case_insensitive: bool,

    /// Report at most one match per text run (the default).
    ///
    /// This mirrors a "first hit highlights the line" presentation. Setting
    /// it to `false` reports every non-overlapping match in a run instead.
    pub first_match_only: bool,

    /// The pattern text.
    pub pattern: String,
}

impl PatternSpec {
    /// A literal substring pattern, case-sensitive, first match per run.
    pub fn literal(pattern: impl Into<String>) -> Self {
        Self {
            mode: MatchMode::Literal,
            case_insensitive: false,
            first_match_only: true,
            pattern: pattern.into(),
        }
    }

    /// A regular expression pattern, case-sensitive, first match per run.
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self {
            mode: MatchMode::Regex,
            ..Self::literal(pattern)
        }
    }

    /// Set whether case distinctions are ignored.
    pub fn with_case_insensitive(mut self, ignore: bool) -> Self {
        self.case_insensitive = ignore;
        self
    }

    /// Set whether only the first match per run is reported.
    pub fn with_first_match_only(mut self, first_only: bool) -> Self {
        self.first_match_only = first_only;
        self
    }
}

/// One match within a run, decomposed for highlighting.
///
/// All three parts borrow from the searched run; `prefix` + `matched` +
/// `suffix` is the run itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    /// Run text before the match.
    pub prefix: &'a str,

    /// The matched text, in the run's original casing.
    pub matched: &'a str,

    /// Run text after the match.
    pub suffix: &'a str,
}

/// A compiled pattern, ready to search text runs.
#[derive(Debug)]
pub struct Matcher {
    engine: Engine,
    first_match_only: bool,
}

#[derive(Debug)]
enum Engine {
    Literal {
        /// The needle, pre-lowercased when folding case.
        needle: String,
        fold_case: bool,
    },
    Regex(Regex),
}

impl Matcher {
    /// Compile a pattern specification.
    ///
    /// Regex syntax errors are returned here and are fatal to the whole
    /// invocation; no per-run compilation ever happens.
    pub fn compile(spec: &PatternSpec) -> Result<Self> {
        let engine = match spec.mode {
            MatchMode::Literal => Engine::Literal {
                needle: if spec.case_insensitive {
                    spec.pattern.to_ascii_lowercase()
                } else {
                    spec.pattern.clone()
                },
                fold_case: spec.case_insensitive,
            },
            MatchMode::Regex => Engine::Regex(
                RegexBuilder::new(&spec.pattern)
                    .case_insensitive(spec.case_insensitive)
                    .build()?,
            ),
        };

        Ok(Self {
            engine,
            first_match_only: spec.first_match_only,
        })
    }

    /// Find matches in a single text run.
    ///
    /// Returns zero or more non-overlapping matches in left-to-right order,
    /// capped at one under the default first-match-only policy. The
    /// decompositions always slice the original-case run, even when the
    /// match was located case-insensitively.
    pub fn find<'a>(&self, run: &'a str) -> Vec<Highlight<'a>> {
        let spans = match &self.engine {
            Engine::Literal { needle, fold_case } => {
                if *fold_case {
                    // ASCII lowercasing keeps byte offsets stable, so spans
                    // located in the folded copy slice the original run.
                    let folded = run.to_ascii_lowercase();
                    literal_spans(&folded, needle, self.first_match_only)
                } else {
                    literal_spans(run, needle, self.first_match_only)
                }
            }
            Engine::Regex(re) => {
                if self.first_match_only {
                    re.find(run).map(|m| (m.start(), m.end())).into_iter().collect()
                } else {
                    re.find_iter(run).map(|m| (m.start(), m.end())).collect()
                }
            }
        };

        spans
            .into_iter()
            .map(|(start, end)| Highlight {
                prefix: &run[..start],
                matched: &run[start..end],
                suffix: &run[end..],
            })
            .collect()
    }
}

/// Non-overlapping substring spans of `needle` within `hay`, left to right.
///
/// An empty needle matches at offset 0 (and, in exhaustive mode, after every
/// character); the scan always advances, so it terminates on any input.
fn literal_spans(hay: &str, needle: &str, first_only: bool) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut at = 0;

    while at <= hay.len() {
        let Some(rel) = hay[at..].find(needle) else {
            break;
        };
        let start = at + rel;
        let end = start + needle.len();
        spans.push((start, end));

        if first_only {
            break;
        }

        at = if end > start {
            end
        } else {
            // Empty match: step over one character to make progress.
            match hay[start..].chars().next() {
                Some(c) => start + c.len_utf8(),
                None => break,
            }
        };
    }

    spans
}
