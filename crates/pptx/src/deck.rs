//! Slide extraction from PPTX containers.
//!
//! A `.pptx` file is a ZIP archive whose slides live at the fixed entry
//! paths `ppt/slides/slide1.xml`, `ppt/slides/slide2.xml`, and so on. That
//! naming convention is part of the document format and drives iteration
//! here: slides are read in index order and the first missing entry ends
//! the deck. Visible text sits between literal `<a:t>` and `</a:t>` tag
//! pairs, so extraction is a two-pointer byte scan rather than XML parsing.

use memchr::memmem;
use slidegrep_core::{Error, Result};
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

/// Opening tag delimiting one visible text run.
const RUN_OPEN: &[u8] = b"<a:t>";

/// Closing tag ending a text run.
const RUN_CLOSE: &[u8] = b"</a:t>";

/// Archive entry path for a 1-based slide index.
fn slide_entry_name(index: usize) -> String {
    format!("ppt/slides/slide{}.xml", index)
}

/// An opened presentation container.
///
/// Holds the ZIP handle for the duration of one file's processing; dropping
/// the deck releases the archive and any decompression state.
pub struct SlideDeck<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> SlideDeck<R> {
    /// Open a reader as a PPTX container.
    ///
    /// Fails with [`Error::NotAnArchive`] when the bytes are not a readable
    /// ZIP archive; the caller decides whether to warn and skip.
    pub fn new(reader: R) -> Result<Self> {
        let archive =
            ZipArchive::new(reader).map_err(|e| Error::NotAnArchive(e.to_string()))?;
        Ok(Self { archive })
    }

    /// Extract the text runs of the slide at a 1-based index.
    ///
    /// Returns `Ok(None)` when the slide entry does not exist, which is the
    /// normal end-of-deck signal, not an error. An entry that exists but cannot be
    /// decompressed or read fully is a per-slide [`Error::SlideRead`]; the
    /// caller skips that slide and continues with the next index.
    pub fn slide_runs(&mut self, index: usize) -> Result<Option<Vec<String>>> {
        let name = slide_entry_name(index);
        let mut entry = match self.archive.by_name(&name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => {
                return Err(Error::SlideRead {
                    slide: index,
                    reason: e.to_string(),
                })
            }
        };

        // Size the buffer from the reported uncompressed size; the buffer
        // is dropped with this call on every path.
        let mut xml = Vec::with_capacity(entry.size() as usize);
        if let Err(e) = entry.read_to_end(&mut xml) {
            return Err(Error::SlideRead {
                slide: index,
                reason: e.to_string(),
            });
        }

        let runs = extract_runs(&xml);
        log::debug!("{}: {} text runs", name, runs.len());
        Ok(Some(runs))
    }

    /// Iterate slides from index 1 until the first missing entry.
    ///
    /// Each item is `(index, runs-or-error)`. A per-slide read error is
    /// yielded and iteration continues with the next index; only an absent
    /// entry terminates the iterator.
    pub fn slides(&mut self) -> Slides<'_, R> {
        Slides {
            deck: self,
            next: 1,
            done: false,
        }
    }
}

/// Iterator over a deck's slides in document order.
pub struct Slides<'a, R: Read + Seek> {
    deck: &'a mut SlideDeck<R>,
    next: usize,
    done: bool,
}

impl<'a, R: Read + Seek> Iterator for Slides<'a, R> {
    type Item = (usize, Result<Vec<String>>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let index = self.next;
        match self.deck.slide_runs(index) {
            Ok(None) => {
                self.done = true;
                None
            }
            Ok(Some(runs)) => {
                self.next += 1;
                Some((index, Ok(runs)))
            }
            Err(e) => {
                self.next += 1;
                Some((index, Err(e)))
            }
        }
    }
}

/// Extract all text runs from raw slide XML, in document order.
///
/// Scans for non-overlapping `<a:t>`...`</a:t>` pairs left to right; the
/// first closing tag after an opening tag ends that run (the tags do not
/// nest in this dialect). A dangling opening tag with no closing tag is
/// ignored. Bytes are reinterpreted as text without transcoding.
pub fn extract_runs(xml: &[u8]) -> Vec<String> {
    let open = memmem::Finder::new(RUN_OPEN);
    let close = memmem::Finder::new(RUN_CLOSE);

    let mut runs = Vec::new();
    let mut at = 0;

    while let Some(rel) = open.find(&xml[at..]) {
        let content_start = at + rel + RUN_OPEN.len();
        let Some(len) = close.find(&xml[content_start..]) else {
            break;
        };
        let content = &xml[content_start..content_start + len];
        runs.push(String::from_utf8_lossy(content).into_owned());
        at = content_start + len + RUN_CLOSE.len();
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::FileOptions;
    use zip::{CompressionMethod, ZipWriter};

    /// Build an in-memory archive with the given slide bodies at
    /// `ppt/slides/slide<n>.xml`, n assigned from 1 in order.
    fn build_deck(slides: &[&str]) -> Cursor<Vec<u8>> {
        build_deck_at(&slides.iter().enumerate().map(|(i, s)| (i + 1, *s)).collect::<Vec<_>>())
    }

    /// Build an archive with explicit slide indices, allowing forced gaps.
    fn build_deck_at(slides: &[(usize, &str)]) -> Cursor<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (index, body) in slides {
            writer
                .start_file(slide_entry_name(*index), FileOptions::default())
                .unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    #[test]
    fn test_extract_single_run() {
        let runs = extract_runs(b"<p:sp><a:t>Hello World</a:t></p:sp>");
        assert_eq!(runs, vec!["Hello World"]);
    }

    #[test]
    fn test_extract_runs_in_document_order() {
        let xml = b"<a:t>first</a:t><a:p/><a:t>second</a:t><a:t>third</a:t>";
        assert_eq!(extract_runs(xml), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_extract_empty_run_participates() {
        let runs = extract_runs(b"<a:t></a:t><a:t>after</a:t>");
        assert_eq!(runs, vec!["", "after"]);
    }

    #[test]
    fn test_extract_ignores_dangling_open_tag() {
        let runs = extract_runs(b"<a:t>closed</a:t><a:t>never closed");
        assert_eq!(runs, vec!["closed"]);
    }

    #[test]
    fn test_extract_no_tags() {
        assert!(extract_runs(b"<p:sld><p:cSld/></p:sld>").is_empty());
        assert!(extract_runs(b"").is_empty());
    }

    #[test]
    fn test_extract_invalid_utf8_is_lossy() {
        let runs = extract_runs(b"<a:t>ok \xff bytes</a:t>");
        assert_eq!(runs.len(), 1);
        assert!(runs[0].starts_with("ok "));
        assert!(runs[0].contains('\u{FFFD}'));
    }

    #[test]
    fn test_open_rejects_non_archive() {
        let result = SlideDeck::new(Cursor::new(b"this is not a zip file".to_vec()));
        assert!(matches!(
            result,
            Err(slidegrep_core::Error::NotAnArchive(_))
        ));
    }

    #[test]
    fn test_deck_with_no_slides() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("ppt/presentation.xml", FileOptions::default())
            .unwrap();
        writer.write_all(b"<p:presentation/>").unwrap();
        let mut cursor = writer.finish().unwrap();
        cursor.set_position(0);

        let mut deck = SlideDeck::new(cursor).unwrap();
        assert_eq!(deck.slides().count(), 0);
    }

    #[test]
    fn test_slides_yield_one_based_indices() {
        let cursor = build_deck(&["<a:t>one</a:t>", "<a:t>two</a:t>"]);
        let mut deck = SlideDeck::new(cursor).unwrap();

        let collected: Vec<(usize, Vec<String>)> = deck
            .slides()
            .map(|(i, r)| (i, r.unwrap()))
            .collect();
        assert_eq!(
            collected,
            vec![
                (1, vec!["one".to_string()]),
                (2, vec!["two".to_string()]),
            ]
        );
    }

    #[test]
    fn test_gap_terminates_iteration() {
        // Slide 3 exists but slide 2 does not; the gap ends the deck.
        let cursor = build_deck_at(&[(1, "<a:t>one</a:t>"), (3, "<a:t>three</a:t>")]);
        let mut deck = SlideDeck::new(cursor).unwrap();

        let indices: Vec<usize> = deck.slides().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1]);
    }

    #[test]
    fn test_slide_runs_absent_entry_is_none() {
        let cursor = build_deck(&["<a:t>only</a:t>"]);
        let mut deck = SlideDeck::new(cursor).unwrap();

        assert!(deck.slide_runs(1).unwrap().is_some());
        assert!(deck.slide_runs(2).unwrap().is_none());
    }

    #[test]
    fn test_unreadable_slide_is_per_slide_error() {
        // Store slide 2 uncompressed, then corrupt its bytes so the CRC
        // check fails when the entry is read back.
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(slide_entry_name(1), FileOptions::default())
            .unwrap();
        writer.write_all(b"<a:t>alpha</a:t>").unwrap();
        writer
            .start_file(
                slide_entry_name(2),
                FileOptions::default().compression_method(CompressionMethod::Stored),
            )
            .unwrap();
        writer.write_all(b"<a:t>CORRUPTME</a:t>").unwrap();
        writer
            .start_file(slide_entry_name(3), FileOptions::default())
            .unwrap();
        writer.write_all(b"<a:t>gamma</a:t>").unwrap();
        let cursor = writer.finish().unwrap();

        let mut bytes = cursor.into_inner();
        let marker = memmem::find(&bytes, b"CORRUPTME").unwrap();
        bytes[marker] ^= 0xFF;

        let mut deck = SlideDeck::new(Cursor::new(bytes)).unwrap();
        let outcomes: Vec<(usize, bool)> = deck
            .slides()
            .map(|(i, r)| (i, r.is_ok()))
            .collect();

        // Slide 2 fails, iteration still reaches slide 3 and stops at the
        // absent slide 4.
        assert_eq!(outcomes, vec![(1, true), (2, false), (3, true)]);
    }
}
