//! Filesystem-safe fragment names derived from sheet names.

/// Derives the file stem for a sheet's fragment: every run of characters
/// outside `[A-Za-z0-9_-]` collapses to a single `_`.
pub fn fragment_stem(sheet_name: &str) -> String {
    let mut stem = String::with_capacity(sheet_name.len());
    let mut in_run = false;
    for ch in sheet_name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            stem.push(ch);
            in_run = false;
        } else if !in_run {
            stem.push('_');
            in_run = true;
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_names_pass_through() {
        assert_eq!(fragment_stem("Module_A-1"), "Module_A-1");
    }

    #[test]
    fn test_runs_collapse_to_single_separator() {
        assert_eq!(fragment_stem("Ass1 / utils.c"), "Ass1_utils_c");
        assert_eq!(fragment_stem("a  +  b"), "a_b");
    }

    #[test]
    fn test_leading_and_trailing_runs_kept() {
        assert_eq!(fragment_stem("  edge  "), "_edge_");
        assert_eq!(fragment_stem("(review)"), "_review_");
    }

    #[test]
    fn test_non_ascii_collapses() {
        assert_eq!(fragment_stem("données: été"), "donn_es_t_");
    }
}
