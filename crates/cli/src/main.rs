//! CLI tool for searching text within PowerPoint presentations.

use anyhow::{Context, Result};
use clap::Parser;
use slidegrep_core::{Matcher, PatternSpec};
use std::path::PathBuf;

mod files;
mod output;
mod search;

/// Search each FILE (of format pptx) for text matching PATTERN.
///
/// Prints one line per match with the file name, slide number, and matched
/// snippet highlighted, in the tradition of grep -H -n.
/// Example: slidegrep -iE 'foo.*bar' presentation.pptx
#[derive(Parser, Debug)]
#[command(name = "slidegrep")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pattern to search for
    #[arg(required = true, value_name = "PATTERN")]
    pattern: String,

    /// PowerPoint file(s), or directories with --recursive
    #[arg(required = true, value_name = "FILE")]
    file: Vec<PathBuf>,

    /// Interpret PATTERN as a regular expression
    #[arg(short = 'E', long = "regexp", conflicts_with = "fixed_string")]
    regexp: bool,

    /// Interpret PATTERN as a literal string (default)
    #[arg(short = 'F', long = "fixed-string")]
    fixed_string: bool,

    /// Ignore case distinctions in PATTERN
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Read all pptx files under each directory, recursively
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Suppress warnings about nonexistent, unreadable, or unsupported files
    #[arg(short = 's', long = "no-messages", conflicts_with = "verbose")]
    no_messages: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Warnings go through the log facade; -s switches them off wholesale.
    let default_level = if args.no_messages {
        "off"
    } else if args.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let spec = if args.regexp {
        PatternSpec::regex(args.pattern.as_str())
    } else {
        PatternSpec::literal(args.pattern.as_str())
    }
    .with_case_insensitive(args.ignore_case);

    // Compile once, before any file is touched; a bad pattern ends the run
    // here with no files processed.
    let matcher = Matcher::compile(&spec)
        .with_context(|| format!("invalid pattern '{}'", args.pattern))?;

    let file_list = files::collect_files(&args.file, args.recursive);
    log::debug!("Searching {} file(s)", file_list.len());

    search::search_files(&file_list, &matcher, |record| output::print_match(&record));

    Ok(())
}
