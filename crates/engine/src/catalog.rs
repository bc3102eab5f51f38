//! Parsed brand list together with its similarity index.

use crate::record::{parse, RecordSet};
use crate::resolver::{resolve_with, MatchPolicy};
use crate::result::QueryResult;
use boikot_search::SimilarityIndex;

/// Records and the index built from their names.
///
/// Both halves come from the same text, so scores line up with records by
/// position. A catalog is immutable; a new document needs a new catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: RecordSet,
    index: SimilarityIndex,
}

impl Catalog {
    /// Parse `raw_text` and index the resulting names.
    pub fn from_text(raw_text: &str) -> Self {
        Self::from_records(parse(raw_text))
    }

    /// Index an already parsed record set.
    pub fn from_records(records: RecordSet) -> Self {
        let index = SimilarityIndex::build(records.names());
        Self { records, index }
    }

    /// Parsed records.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Index over the record names.
    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// True when the text yielded no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Score and resolve one query.
    ///
    /// An empty catalog is reported as an unavailable source.
    pub fn lookup(&self, policy: &MatchPolicy, brand_name: &str) -> QueryResult {
        if self.is_empty() {
            return QueryResult::source_unavailable();
        }
        let scores = self.index.score(brand_name);
        resolve_with(policy, &self.records, &scores, brand_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Outcome;

    #[test]
    fn test_scores_align_with_records() {
        let catalog = Catalog::from_text("Aqua Tidak Minuman\nNestle boikot Makanan\n");
        assert_eq!(catalog.records().len(), 2);
        assert_eq!(catalog.index().len(), 2);

        let scores = catalog.index().score("nestle");
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > 0.99);
    }

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let catalog = Catalog::from_text("just two\n");
        assert!(catalog.is_empty());
        let result = catalog.lookup(&MatchPolicy::default(), "Nestle");
        assert_eq!(result.outcome, Outcome::SourceUnavailable);
    }
}
