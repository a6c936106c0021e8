//! Terminal rendering of match records.
//!
//! One line per match, colored in the grep tradition:
//! magenta file, green slide number, cyan separators, bold red match.

use slidegrep_core::MatchRecord;

const RESET: &str = "\x1b[0m";
const RED_BOLD: &str = "\x1b[01;31m";
const GREEN: &str = "\x1b[32m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

/// Render one match as a colored `file:slide:snippet` line.
pub fn render(record: &MatchRecord) -> String {
    format!(
        "{}{}{}:{}{}{}:{}{}{}{}{}{}",
        MAGENTA,
        record.file,
        CYAN,
        GREEN,
        record.slide,
        CYAN,
        RESET,
        record.prefix,
        RED_BOLD,
        record.matched,
        RESET,
        record.suffix,
    )
}

/// Print one match to stdout.
pub fn print_match(record: &MatchRecord) {
    println!("{}", render(record));
}
