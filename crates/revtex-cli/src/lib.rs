//! CLI library components for the revtex exporter.

pub mod logging;
pub mod pipeline;
pub mod stats;
pub mod summary;
pub mod types;
