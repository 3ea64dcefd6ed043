//! Core fragment generation for the revtex exporter.
//!
//! This crate is pure: it consumes [`Sheet`] grids and configuration values
//! and produces finished, already-redacted fragment text. All filesystem
//! work lives in the collaborating crates.
//!
//! [`Sheet`]: revtex_model::Sheet

pub mod assemble;
pub mod classify;
pub mod codes;
pub mod index;
pub mod latex;
pub mod metadata;
pub mod redact;
pub mod reviewers;
pub mod section;

pub use assemble::{Assembly, SectionFragment, assemble};
pub use classify::{BOUNDARY_LABEL, REPORT_MARKER, SheetClass, classify};
pub use codes::{parse_codes, render_codes_table};
pub use index::render_index;
pub use latex::{sanitize, sanitize_cell};
pub use metadata::extract_metadata;
pub use redact::{RedactionBuildError, RedactionEngine};
pub use reviewers::group_by_reviewer;
pub use section::{SectionRender, render_section};
