//! Shared data model for the revtex exporter.
//!
//! Everything here is derived, read-once data: cell grids handed over by the
//! workbook collaborator, the parsed review structures built from them, and
//! the configuration value types the render pipeline consumes.

pub mod cell;
pub mod codes;
pub mod names;
pub mod redaction;
pub mod report;

pub use cell::{CellValue, Sheet};
pub use codes::{CodeEvent, CodeTable, CodeTableEntry};
pub use names::fragment_stem;
pub use redaction::RedactionRule;
pub use report::{MetadataField, ReviewRow, ReviewerGroups, UNKNOWN_REVIEWER};
