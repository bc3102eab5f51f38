//! Brand records parsed from extracted document text.
//!
//! A usable line ends with two tokens, the status and the category, preceded
//! by one or more name tokens:
//!
//! ```text
//! Nestle Pure Life boikot Minuman
//! ```

use serde::{Deserialize, Serialize};

/// One brand entry from the boycott list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandRecord {
    name: String,
    status: String,
    category: String,
}

impl BrandRecord {
    /// Create a record from its parts.
    pub fn new(
        name: impl Into<String>,
        status: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
            category: category.into(),
        }
    }

    /// Parse one line, or `None` when it has fewer than three tokens.
    pub fn from_line(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [name @ .., status, category] = tokens.as_slice() else {
            return None;
        };
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name.join(" "), *status, *category))
    }

    /// Brand name, tokens joined by single spaces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Status token exactly as written in the source.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Category token exactly as written in the source.
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Records in source order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<BrandRecord>,
}

impl RecordSet {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing could be parsed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&BrandRecord> {
        self.records.get(index)
    }

    /// Iterate in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, BrandRecord> {
        self.records.iter()
    }

    /// Record names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(BrandRecord::name)
    }
}

impl FromIterator<BrandRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = BrandRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a BrandRecord;
    type IntoIter = std::slice::Iter<'a, BrandRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parse extracted document text into records.
///
/// Blank lines and lines with fewer than three tokens are skipped. Skips are
/// only reported on the debug log.
pub fn parse(raw_text: &str) -> RecordSet {
    let mut dropped = 0usize;
    let records: RecordSet = raw_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let record = BrandRecord::from_line(line);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();

    tracing::debug!(records = records.len(), dropped, "Parsed brand list");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_word_name() {
        let record = BrandRecord::from_line("Nestle boikot Makanan").unwrap();
        assert_eq!(record.name(), "Nestle");
        assert_eq!(record.status(), "boikot");
        assert_eq!(record.category(), "Makanan");
    }

    #[test]
    fn test_multi_word_name_collapses_whitespace() {
        let record = BrandRecord::from_line("  Nestle   Pure\tLife  boikot Minuman ").unwrap();
        assert_eq!(record.name(), "Nestle Pure Life");
        assert_eq!(record.status(), "boikot");
        assert_eq!(record.category(), "Minuman");
    }

    #[test]
    fn test_short_lines_are_dropped() {
        assert!(BrandRecord::from_line("Nestle boikot").is_none());
        assert!(BrandRecord::from_line("Nestle").is_none());
        assert!(BrandRecord::from_line("   ").is_none());
    }

    #[test]
    fn test_parse_keeps_order_and_duplicates() {
        let text = "Nestle boikot Makanan\n\nIndofood Tidak Makanan\n\
                    DAFTAR PRODUK\nNestle boikot Minuman\r\n";
        let records = parse(text);

        assert_eq!(records.len(), 3);
        let names: Vec<&str> = records.names().collect();
        assert_eq!(names, vec!["Nestle", "Indofood", "Nestle"]);
        assert_eq!(records.get(2).unwrap().category(), "Minuman");
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n").is_empty());
    }

    proptest! {
        #[test]
        fn prop_two_token_lines_never_produce_records(a in "[A-Za-z]{1,8}", b in "[A-Za-z]{1,8}") {
            let text = format!("{a} {b}\n");
            prop_assert!(parse(&text).is_empty());
        }

        #[test]
        fn prop_every_record_has_non_empty_fields(text in "[A-Za-z \n]{0,120}") {
            for record in &parse(&text) {
                prop_assert!(!record.name().is_empty());
                prop_assert!(!record.status().is_empty());
                prop_assert!(!record.category().is_empty());
            }
        }
    }
}
