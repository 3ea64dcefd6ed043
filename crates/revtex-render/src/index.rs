//! The reviews-list fragment referencing every generated section.

/// Renders the index fragment: one `\input` per section stem, in workbook
/// order, with a trailing newline. The caller only writes the file when at
/// least one section was generated.
pub fn render_index(stems: &[String]) -> String {
    let mut out = String::new();
    for stem in stems {
        out.push_str("\\input{sections/");
        out.push_str(stem);
        out.push_str(".tex}\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_input_per_stem_in_order() {
        let stems = vec!["Ass1_utils_c".to_string(), "Ass1_main_c".to_string()];
        assert_eq!(
            render_index(&stems),
            "\\input{sections/Ass1_utils_c.tex}\n\\input{sections/Ass1_main_c.tex}\n"
        );
    }

    #[test]
    fn test_empty_index_is_empty() {
        assert_eq!(render_index(&[]), "");
    }
}
