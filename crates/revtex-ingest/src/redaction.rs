//! Redaction rule loading from the two-column CSV configuration.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use revtex_model::RedactionRule;

use crate::error::{IngestError, Result};

/// Loads redaction rules from `path`.
///
/// A missing file means no redaction is configured and yields an empty rule
/// set. Records with fewer than two columns are skipped, as are records with
/// an empty original string.
pub fn load_redaction_rules(path: &Path) -> Result<Vec<RedactionRule>> {
    if !path.exists() {
        debug!(path = %path.display(), "no redaction rule file, redaction disabled");
        return Ok(Vec::new());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::RedactionCsv {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rules = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::RedactionCsv {
            path: path.to_path_buf(),
            source,
        })?;
        let (Some(original), Some(replacement)) = (record.get(0), record.get(1)) else {
            continue;
        };
        if original.is_empty() {
            continue;
        }
        rules.push(RedactionRule::new(original, replacement));
    }
    debug!(path = %path.display(), rules = rules.len(), "loaded redaction rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_disables_redaction() {
        let rules = load_redaction_rules(Path::new("/nonexistent/redactions.csv")).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_loads_pairs_and_skips_short_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redactions.csv");
        std::fs::write(&path, "Alice Smith,Reviewer A\nAlice,REDACTED\nlonely\n").unwrap();

        let rules = load_redaction_rules(&path).unwrap();
        assert_eq!(
            rules,
            vec![
                RedactionRule::new("Alice Smith", "Reviewer A"),
                RedactionRule::new("Alice", "REDACTED"),
            ]
        );
    }

    #[test]
    fn test_quoted_values_keep_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redactions.csv");
        std::fs::write(&path, "\"Smith, Alice\",Reviewer A\n").unwrap();

        let rules = load_redaction_rules(&path).unwrap();
        assert_eq!(rules, vec![RedactionRule::new("Smith, Alice", "Reviewer A")]);
    }
}
