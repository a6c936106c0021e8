//! PPTX (OOXML) slide extraction backend for presentation text search.
//!
//! Opens .pptx files as ZIP archives and pulls visible text runs out of
//! each slide's XML without a full XML parser.

pub mod deck;

pub use deck::{extract_runs, SlideDeck, Slides};
