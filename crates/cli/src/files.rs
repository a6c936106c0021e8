//! Building the list of presentation files to search.
//!
//! FILE arguments are validated before any searching starts: regular files
//! are sniffed for the ZIP container magic, and directories are expanded
//! recursively under `-r`. Problems are warnings; the list is best-effort.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ZIP local-file magic; every PPTX container starts with it.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Expand the FILE arguments into an ordered list of searchable paths.
///
/// Explicitly named files only need to sniff as ZIP containers; files found
/// by directory traversal must also carry a `.pptx` extension so a `-r` run
/// does not grep every archive on disk.
pub fn collect_files(args: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for arg in args {
        let meta = match fs::metadata(arg) {
            Ok(meta) => meta,
            Err(_) => {
                log::warn!("{}: No such file or directory", arg.display());
                continue;
            }
        };

        if meta.is_file() {
            if has_zip_magic(arg) {
                files.push(arg.clone());
            } else {
                log::warn!(
                    "{}: not a pptx container, skipping",
                    arg.display()
                );
            }
        } else if meta.is_dir() {
            if !recursive {
                log::warn!("{}: Is a directory", arg.display());
                continue;
            }
            collect_dir(arg, &mut files);
        }
    }

    files
}

/// Walk a directory, appending every file that looks like a PPTX.
///
/// Unreadable entries (permissions, dangling links) are warned about and
/// skipped without ending the walk.
fn collect_dir(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("{}", e);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && has_pptx_extension(path) && has_zip_magic(path) {
            files.push(path.to_path_buf());
        }
    }
}

/// True when the file starts with the ZIP local-file magic bytes.
fn has_zip_magic(path: &Path) -> bool {
    let mut magic = [0u8; 4];
    match fs::File::open(path).and_then(|mut f| f.read_exact(&mut magic)) {
        Ok(()) => magic == ZIP_MAGIC,
        Err(_) => false,
    }
}

fn has_pptx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pptx"))
        .unwrap_or(false)
}
