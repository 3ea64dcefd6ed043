//! LaTeX text sanitization with controlled break hints.

use revtex_model::CellValue;

/// Punctuation after which a break hint is inserted when the next character
/// is not a space, so long paths, identifiers, and enumerations can wrap.
const BREAKABLE: &str = ".,/:-_";

/// Escapes `text` for LaTeX and appends `\allowbreak{}` after breakable
/// punctuation that is immediately followed by a non-space character.
///
/// Line breaks (`\r\n`, `\r`, `\n`) are normalized to single spaces first,
/// then the string is processed in a single forward scan so that characters
/// introduced by an escape are never re-escaped. Whitespace runs collapse to
/// one space at the end.
///
/// NOT idempotent: sanitizing already-sanitized text escapes the backslashes
/// introduced by the first pass. Callers sanitize exactly once per raw value.
pub fn sanitize(text: &str) -> String {
    let normalized = text
        .replace("\r\n", " ")
        .replace('\r', " ")
        .replace('\n', " ");
    let normalized = normalized.trim();

    let mut out = String::with_capacity(normalized.len());
    let mut chars = normalized.chars().peekable();
    while let Some(ch) = chars.next() {
        if let Some(escaped) = escape(ch) {
            out.push_str(escaped);
            continue;
        }
        let breaks = BREAKABLE.contains(ch)
            && matches!(chars.peek(), Some(next) if *next != ' ');
        if breaks {
            if ch == '_' {
                out.push_str("\\_\\allowbreak{}");
            } else {
                out.push(ch);
                out.push_str("\\allowbreak{}");
            }
            continue;
        }
        out.push(ch);
    }
    collapse_whitespace(&out)
}

/// Sanitizes a cell, rendering numbers and trimming text first. Empty cells
/// yield an empty string.
pub fn sanitize_cell(cell: &CellValue) -> String {
    sanitize(&cell.display_text())
}

fn escape(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\\' => "\\textbackslash{}",
        '&' => "\\&",
        '%' => "\\%",
        '$' => "\\$",
        '#' => "\\#",
        '{' => "\\{",
        '}' => "\\}",
        '~' => "\\textasciitilde{}",
        '^' => "\\textasciicircum{}",
        '|' => "\\textbar{}",
        _ => return None,
    })
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for part in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize("hello world"), "hello world");
    }

    #[test]
    fn test_escapes_special_characters() {
        assert_eq!(sanitize("50% & $5"), "50\\% \\& \\$5");
        assert_eq!(sanitize("a{b}c"), "a\\{b\\}c");
        assert_eq!(sanitize("x#y"), "x\\#y");
        assert_eq!(sanitize("~"), "\\textasciitilde{}");
        assert_eq!(sanitize("^"), "\\textasciicircum{}");
        assert_eq!(sanitize("a|b"), "a\\textbar{}b");
        assert_eq!(sanitize("C:\\tmp"), "C:\\allowbreak{}\\textbackslash{}tmp");
    }

    #[test]
    fn test_break_hint_before_non_space() {
        assert_eq!(sanitize("obj.method()"), "obj.\\allowbreak{}method()");
        assert_eq!(sanitize("1,2,3"), "1,\\allowbreak{}2,\\allowbreak{}3");
        assert_eq!(sanitize("src/main.c"), "src/\\allowbreak{}main.\\allowbreak{}c");
    }

    #[test]
    fn test_no_break_hint_before_space_or_end() {
        assert_eq!(sanitize("end."), "end.");
        assert_eq!(sanitize("a. b"), "a. b");
    }

    #[test]
    fn test_underscore_breakable_position_escapes() {
        assert_eq!(sanitize("my_var"), "my\\_\\allowbreak{}var");
        // trailing underscore stays raw, matching the exporter's behavior
        assert_eq!(sanitize("tail_"), "tail_");
    }

    #[test]
    fn test_newlines_normalize_to_spaces() {
        assert_eq!(sanitize("one\r\ntwo\rthree\nfour"), "one two three four");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(sanitize("  a \t  b  "), "a b");
    }

    #[test]
    fn test_not_idempotent_by_design() {
        let once = sanitize("100%");
        let twice = sanitize(&once);
        assert_eq!(once, "100\\%");
        assert_ne!(twice, once);
        assert!(twice.contains("\\textbackslash{}"));
    }

    #[test]
    fn test_empty_cell_yields_empty_string() {
        assert_eq!(sanitize_cell(&CellValue::Empty), "");
        assert_eq!(sanitize_cell(&CellValue::Text("   ".to_string())), "");
    }

    #[test]
    fn test_number_cell() {
        assert_eq!(sanitize_cell(&CellValue::Number(42.0)), "42");
        assert_eq!(sanitize_cell(&CellValue::Number(2.5)), "2.\\allowbreak{}5");
    }
}
