//! Codes mapping file loading.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{IngestError, Result};

/// Reads the plain-text check-code mapping.
///
/// Returns `None` (with a warning) when the file does not exist; the caller
/// skips the codes table fragment in that case.
pub fn load_codes_mapping(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        warn!(path = %path.display(), "codes mapping not found, skipping codes table");
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| IngestError::CodesRead {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mapping_is_skipped() {
        let text = load_codes_mapping(Path::new("/nonexistent/codes_mapping.txt")).unwrap();
        assert!(text.is_none());
    }

    #[test]
    fn test_reads_mapping_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("codes_mapping.txt");
        std::fs::write(&path, "I - General\n1 First check\n").unwrap();

        let text = load_codes_mapping(&path).unwrap();
        assert_eq!(text.as_deref(), Some("I - General\n1 First check\n"));
    }
}
