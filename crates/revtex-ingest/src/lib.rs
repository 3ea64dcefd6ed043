//! I/O collaborators for the revtex exporter.
//!
//! The core pipeline never touches the filesystem; this crate turns the
//! external inputs into plain values: workbook files into [`Sheet`] grids,
//! the redaction CSV into rules, and the codes mapping into text.
//!
//! [`Sheet`]: revtex_model::Sheet

pub mod codes;
pub mod error;
pub mod redaction;
pub mod workbook;

pub use codes::load_codes_mapping;
pub use error::{IngestError, Result};
pub use redaction::load_redaction_rules;
pub use workbook::load_workbook;
