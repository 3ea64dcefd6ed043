//! Parsed check-code mapping: recognized lines in source order.

/// One recognized line of the codes mapping file.
///
/// The parser keeps headings as events even when no rows follow them, so the
/// renderer can reproduce the source structure exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeEvent {
    /// A section heading (Roman-numeral line, kept verbatim).
    Section(String),
    /// A subsection heading (`#` line, marker stripped).
    Subsection(String),
    /// A code/description table row.
    Row { code: String, description: String },
}

/// The parsed codes mapping, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeTable {
    pub events: Vec<CodeEvent>,
}

/// A table row together with its most-recently-seen heading context.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTableEntry<'a> {
    pub section: Option<&'a str>,
    pub subsection: Option<&'a str>,
    pub code: &'a str,
    pub description: &'a str,
}

impl CodeTable {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Derives the row entries with their section/subsection context.
    /// A new section clears the current subsection.
    pub fn entries(&self) -> Vec<CodeTableEntry<'_>> {
        let mut section: Option<&str> = None;
        let mut subsection: Option<&str> = None;
        let mut entries = Vec::new();
        for event in &self.events {
            match event {
                CodeEvent::Section(title) => {
                    section = Some(title);
                    subsection = None;
                }
                CodeEvent::Subsection(title) => subsection = Some(title),
                CodeEvent::Row { code, description } => entries.push(CodeTableEntry {
                    section,
                    subsection,
                    code,
                    description,
                }),
            }
        }
        entries
    }

    /// Looks up the description for a check code, first match wins.
    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.events.iter().find_map(|event| match event {
            CodeEvent::Row { code: c, description } if c == code => Some(description.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CodeTable {
        CodeTable {
            events: vec![
                CodeEvent::Section("I - Style".to_string()),
                CodeEvent::Row {
                    code: "1".to_string(),
                    description: "naming".to_string(),
                },
                CodeEvent::Subsection("Layout".to_string()),
                CodeEvent::Row {
                    code: "2".to_string(),
                    description: "indentation".to_string(),
                },
                CodeEvent::Section("II - Logic".to_string()),
                CodeEvent::Row {
                    code: "3".to_string(),
                    description: "off by one".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_entries_track_heading_context() {
        let table = sample();
        let entries = table.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].section, Some("I - Style"));
        assert_eq!(entries[0].subsection, None);
        assert_eq!(entries[1].subsection, Some("Layout"));
        // a new section clears the subsection
        assert_eq!(entries[2].section, Some("II - Logic"));
        assert_eq!(entries[2].subsection, None);
    }

    #[test]
    fn test_description_lookup() {
        let table = sample();
        assert_eq!(table.description_for("2"), Some("indentation"));
        assert_eq!(table.description_for("99"), None);
    }
}
