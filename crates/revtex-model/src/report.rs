//! Parsed review-report structures: metadata fields and reviewer groups.

/// Group key used when a body row has no reviewer name.
pub const UNKNOWN_REVIEWER: &str = "Unknown";

/// One labeled metadata field from a sheet header.
///
/// `key` always ends with `:`. `values` holds one entry per physical row the
/// field spanned (continuation rows with a blank key column append here), in
/// source order. Values are stored raw; the renderer sanitizes exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataField {
    pub key: String,
    pub values: Vec<String>,
}

/// One review-table row after sanitization, at its fixed 6-column layout.
///
/// `description` is parsed but never rendered: descriptions are looked up in
/// the check-code table instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub code: String,
    pub description: String,
    pub line: String,
    pub comment: String,
    pub suggestion: String,
    pub reviewer: String,
}

impl ReviewRow {
    /// Logical width of a review row.
    pub const WIDTH: usize = 6;

    /// Builds a row from already-sanitized cells, padding with empty strings
    /// or truncating so positional access never fails.
    pub fn from_cells(mut cells: Vec<String>) -> Self {
        cells.resize(Self::WIDTH, String::new());
        let mut cells = cells.into_iter();
        // resize() guarantees exactly WIDTH entries
        let mut next = || cells.next().unwrap_or_default();
        Self {
            code: next(),
            description: next(),
            line: next(),
            comment: next(),
            suggestion: next(),
            reviewer: next(),
        }
    }
}

/// Ordered mapping reviewer name -> review rows.
///
/// Insertion order is first-seen order of each reviewer in the sheet and
/// drives output order, so this is a list of pairs rather than a hash map.
#[derive(Debug, Clone, Default)]
pub struct ReviewerGroups {
    groups: Vec<(String, Vec<ReviewRow>)>,
}

impl ReviewerGroups {
    /// Appends a row to the reviewer's group, creating the group at the end
    /// of the ordering on first sight.
    pub fn push(&mut self, reviewer: &str, row: ReviewRow) {
        match self.groups.iter().position(|(name, _)| name == reviewer) {
            Some(index) => self.groups[index].1.push(row),
            None => self.groups.push((reviewer.to_string(), vec![row])),
        }
    }

    pub fn get(&self, reviewer: &str) -> Option<&[ReviewRow]> {
        self.groups
            .iter()
            .find(|(name, _)| name == reviewer)
            .map(|(_, rows)| rows.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ReviewRow])> {
        self.groups
            .iter()
            .map(|(name, rows)| (name.as_str(), rows.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of rows across all groups.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|(_, rows)| rows.len()).sum()
    }
}
