//! Search orchestration: slide extraction composed with pattern matching.
//!
//! All per-file and per-slide failures stop here as warnings; nothing from
//! normal file processing propagates to the top level.

use slidegrep_core::{MatchRecord, Matcher, Result};
use slidegrep_pptx::SlideDeck;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::PathBuf;

/// Search one opened container and feed every match to the sink.
///
/// Returns `Err` only when the reader cannot be opened as an archive; a
/// slide that fails to read is logged and skipped while iteration continues
/// with the next index.
pub fn search_deck<R, F>(
    reader: R,
    file: &str,
    matcher: &Matcher,
    on_match: &mut F,
) -> Result<()>
where
    R: Read + Seek,
    F: FnMut(MatchRecord),
{
    let mut deck = SlideDeck::new(reader)?;

    for (slide, outcome) in deck.slides() {
        let runs = match outcome {
            Ok(runs) => runs,
            Err(e) => {
                log::warn!("{}: {}", file, e);
                continue;
            }
        };

        for run in &runs {
            for hit in matcher.find(run) {
                on_match(MatchRecord::new(
                    file,
                    slide,
                    hit.prefix,
                    hit.matched,
                    hit.suffix,
                ));
            }
        }
    }

    Ok(())
}

/// Search every file in the list, in order.
///
/// A file that cannot be opened or is not a valid archive is warned about
/// and skipped; the run never aborts because of one bad input.
pub fn search_files<F>(paths: &[PathBuf], matcher: &Matcher, mut on_match: F)
where
    F: FnMut(MatchRecord),
{
    for path in paths {
        let file = path.display().to_string();

        let reader = match File::open(path) {
            Ok(f) => BufReader::new(f),
            Err(e) => {
                log::warn!("{}: {}", file, e);
                continue;
            }
        };

        if let Err(e) = search_deck(reader, &file, matcher, &mut on_match) {
            log::warn!("{}: {}", file, e);
        }
    }
}
