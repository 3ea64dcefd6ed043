//! The check-code mapping grammar and its LaTeX rendering.
//!
//! The mapping is line-oriented: Roman-numeral lines open sections, `#`
//! lines open subsections, integer-prefixed lines are table rows, and
//! everything else is ignored. Headings always close the current table, so a
//! table never spans a heading.

use revtex_model::{CodeEvent, CodeTable};

use crate::latex::sanitize;

const ROMAN: &str = "IVXLCDM";

/// Parses the codes mapping text into recognized events, in source order.
///
/// Lines matching none of the recognized shapes are silently ignored; the
/// grammar has no error production.
pub fn parse_codes(text: &str) -> CodeTable {
    let mut events = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_section_heading(line) {
            events.push(CodeEvent::Section(line.to_string()));
            continue;
        }
        if let Some(rest) = line.strip_prefix('#') {
            events.push(CodeEvent::Subsection(
                rest.trim_start_matches('#').trim().to_string(),
            ));
            continue;
        }
        if let Some((code, description)) = split_code_row(line) {
            events.push(CodeEvent::Row {
                code: code.to_string(),
                description: description.to_string(),
            });
        }
    }
    CodeTable { events }
}

/// One or more Roman-numeral characters, optional whitespace, then a dash
/// (`-` or `–`).
fn is_section_heading(line: &str) -> bool {
    let rest = line.trim_start_matches(|ch| ROMAN.contains(ch));
    if rest.len() == line.len() {
        return false;
    }
    let rest = rest.trim_start();
    rest.starts_with('-') || rest.starts_with('–')
}

/// Leading integer, at least one whitespace character, then the description.
fn split_code_row(line: &str) -> Option<(&str, &str)> {
    let digits_end = line
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 || digits_end == line.len() {
        return None;
    }
    let (code, rest) = line.split_at(digits_end);
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some((code, rest.trim_start()))
}

/// Renders the parsed mapping as a sectioned LaTeX lookup table.
pub fn render_codes_table(table: &CodeTable) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("% --- Check Code lookup table (auto-generated) ---".to_string());
    lines.push(
        "\\noindent This table lists the check codes used in the per-file reviews.".to_string(),
    );
    lines.push("\\vspace{0.5em}".to_string());

    let mut table_open = false;
    for event in &table.events {
        match event {
            CodeEvent::Section(title) => {
                close_table(&mut lines, &mut table_open);
                lines.push(format!("\\subsection*{{{}}}", sanitize(title)));
            }
            CodeEvent::Subsection(title) => {
                close_table(&mut lines, &mut table_open);
                lines.push(format!("\\subsubsection*{{{}}}", sanitize(title)));
            }
            CodeEvent::Row { code, description } => {
                if !table_open {
                    lines.push(
                        "\\begin{longtable}{>{\\raggedright\\arraybackslash}p{0.12\\textwidth} \
                         >{\\raggedright\\arraybackslash}p{0.84\\textwidth}}"
                            .to_string(),
                    );
                    lines.push("\\toprule".to_string());
                    lines.push(
                        "\\textbf{Check Code} & \\textbf{Check code description} \\\\".to_string(),
                    );
                    lines.push("\\midrule".to_string());
                    table_open = true;
                }
                lines.push(format!("{} & {} \\\\", sanitize(code), sanitize(description)));
            }
        }
    }
    close_table(&mut lines, &mut table_open);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn close_table(lines: &mut Vec<String>, table_open: &mut bool) {
    if *table_open {
        lines.push("\\bottomrule".to_string());
        lines.push("\\end{longtable}".to_string());
        *table_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_headings() {
        assert!(is_section_heading("I - General"));
        assert!(is_section_heading("III- Memory"));
        assert!(is_section_heading("IV – Style"));
        assert!(!is_section_heading("Vendor - specific"));
        assert!(!is_section_heading("- dash first"));
        assert!(!is_section_heading("1 - not roman"));
    }

    #[test]
    fn test_code_rows() {
        assert_eq!(split_code_row("12 Missing check"), Some(("12", "Missing check")));
        assert_eq!(split_code_row("3\tTab separated"), Some(("3", "Tab separated")));
        assert_eq!(split_code_row("12"), None);
        assert_eq!(split_code_row("12x no space"), None);
        assert_eq!(split_code_row("code 12"), None);
    }

    #[test]
    fn test_parse_keeps_source_order_and_ignores_noise() {
        let table = parse_codes("I - General\n\nnoise line\n1 First\n# Sub\n2 Second\n");
        assert_eq!(
            table.events,
            vec![
                CodeEvent::Section("I - General".to_string()),
                CodeEvent::Row {
                    code: "1".to_string(),
                    description: "First".to_string(),
                },
                CodeEvent::Subsection("Sub".to_string()),
                CodeEvent::Row {
                    code: "2".to_string(),
                    description: "Second".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_subsection_strips_all_leading_hashes() {
        let table = parse_codes("## Deep heading\n");
        assert_eq!(
            table.events,
            vec![CodeEvent::Subsection("Deep heading".to_string())]
        );
    }

    #[test]
    fn test_render_two_table_blocks_around_subsection() {
        let table = parse_codes("I - Header\n1 foo\n2 bar\n# Sub\n3 baz\n");
        let tex = render_codes_table(&table);

        assert_eq!(tex.matches("\\begin{longtable}").count(), 2);
        assert_eq!(tex.matches("\\end{longtable}").count(), 2);
        assert_eq!(tex.matches("\\subsection*").count(), 1);
        assert_eq!(tex.matches("\\subsubsection*").count(), 1);
        assert!(tex.contains("1 & foo \\\\"));
        assert!(tex.contains("2 & bar \\\\"));
        assert!(tex.contains("3 & baz \\\\"));

        // the subsection heading sits between the two table blocks
        let close = tex.find("\\end{longtable}").unwrap();
        let sub = tex.find("\\subsubsection*{Sub}").unwrap();
        assert!(close < sub);
    }

    #[test]
    fn test_heading_only_input_renders_no_table() {
        let tex = render_codes_table(&parse_codes("I - Empty section\n# Empty sub\n"));
        assert!(!tex.contains("longtable"));
        assert!(tex.contains("\\subsection*{I - Empty section}"));
        assert!(tex.contains("\\subsubsection*{Empty sub}"));
    }

    #[test]
    fn test_open_table_is_closed_at_end_of_input() {
        let tex = render_codes_table(&parse_codes("1 only row\n"));
        assert!(tex.ends_with("\\bottomrule\n\\end{longtable}\n"));
    }

    #[test]
    fn test_descriptions_are_sanitized() {
        let tex = render_codes_table(&parse_codes("7 uses 100% CPU\n"));
        assert!(tex.contains("7 & uses 100\\% CPU \\\\"));
    }
}
