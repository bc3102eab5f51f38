//! TF-IDF vectorization and cosine scoring over a brand-name corpus.
//!
//! Each name is one document. Weights are raw term counts multiplied by the
//! smoothed inverse document frequency `ln((1 + n) / (1 + df)) + 1`, and every
//! vector is L2-normalised so that a dot product is the cosine similarity.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Two or more word characters.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is valid"));

/// Split text into lowercase terms.
///
/// Single-character runs are dropped, so `"A&W Root Beer"` yields
/// `["root", "beer"]`.
///
/// # Example
/// ```
/// use boikot_search::tokenize;
///
/// assert_eq!(tokenize("Coca-Cola Zero"), vec!["coca", "cola", "zero"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sparse vector as `(column, weight)` pairs sorted by column.
type SparseVector = Vec<(usize, f64)>;

/// Vocabulary and weight matrix built from a fixed list of names.
///
/// The vocabulary never grows after [`SimilarityIndex::build`]; query terms
/// outside it carry no weight. Rebuild the index when the names change.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl SimilarityIndex {
    /// Build the index, one document per name.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let documents: Vec<Vec<String>> = names
            .into_iter()
            .map(|name| tokenize(name.as_ref()))
            .collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for tokens in &documents {
            let mut seen: Vec<usize> = Vec::with_capacity(tokens.len());
            for token in tokens {
                let next = vocabulary.len();
                let column = *vocabulary.entry(token.clone()).or_insert(next);
                if column == document_frequency.len() {
                    document_frequency.push(0);
                }
                if !seen.contains(&column) {
                    seen.push(column);
                    document_frequency[column] += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let mut index = Self {
            vocabulary,
            idf,
            vectors: Vec::new(),
        };
        let vectors: Vec<SparseVector> = documents
            .iter()
            .map(|tokens| index.weigh(tokens))
            .collect();
        index.vectors = vectors;

        tracing::debug!(
            documents = index.vectors.len(),
            terms = index.vocabulary.len(),
            "Similarity index built"
        );

        index
    }

    /// Number of indexed names.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// True when no names were indexed.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of distinct terms in the vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether a (lowercase) term is part of the vocabulary.
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    /// Cosine similarity of `query` against every indexed name, in build order.
    ///
    /// Every score lies in `[0, 1]`. A query sharing no term with the corpus
    /// scores 0 everywhere.
    pub fn score(&self, query: &str) -> Vec<f64> {
        let query_vector = self.weigh(&tokenize(query));
        if query_vector.is_empty() {
            return vec![0.0; self.vectors.len()];
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.vectors
                .par_iter()
                .map(|vector| cosine(&query_vector, vector))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.vectors
                .iter()
                .map(|vector| cosine(&query_vector, vector))
                .collect()
        }
    }

    /// Weighted, normalised vector for already tokenized text.
    fn weigh(&self, tokens: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(column, count)| (column, count as f64 * self.idf[column]))
            .collect();
        vector.sort_unstable_by_key(|&(column, _)| column);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }
}

/// Dot product of two normalised sparse vectors, clamped to `[0, 1]`.
fn cosine(a: &[(usize, f64)], b: &[(usize, f64)]) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 4] = ["Nestle", "Indofood", "Nestle Pure Life", "Aqua Danone"];

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(tokenize("KFC, McDonald's"), vec!["kfc", "mcdonald"]);
        assert_eq!(tokenize("  Indofood\tTidak "), vec!["indofood", "tidak"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(tokenize("A&W"), Vec::<String>::new());
        assert_eq!(tokenize("X"), Vec::<String>::new());
    }

    #[test]
    fn test_build_vocabulary() {
        let index = SimilarityIndex::build(NAMES);
        assert_eq!(index.len(), 4);
        assert_eq!(index.vocabulary_len(), 6);
        assert!(index.contains_term("nestle"));
        assert!(!index.contains_term("Nestle"));
    }

    #[test]
    fn test_exact_name_scores_one() {
        let index = SimilarityIndex::build(NAMES);
        let scores = index.score("Nestle");
        assert!((scores[0] - 1.0).abs() < 1e-9);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_partial_name_scores_below_one() {
        let index = SimilarityIndex::build(NAMES);
        let scores = index.score("Pure Life");
        assert!(scores[2] > 0.7 && scores[2] < 1.0);
        assert_eq!(scores[0], 0.0);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        // "nestle" appears in two names, "pure" in one.
        let index = SimilarityIndex::build(NAMES);
        let by_common = index.score("nestle")[2];
        let by_rare = index.score("pure")[2];
        assert!(by_rare > by_common);
    }

    #[test]
    fn test_unknown_terms_score_zero() {
        let index = SimilarityIndex::build(NAMES);
        assert_eq!(index.score("Nestel"), vec![0.0; 4]);
        assert_eq!(index.score(""), vec![0.0; 4]);
    }

    #[test]
    fn test_scoring_does_not_grow_vocabulary() {
        let index = SimilarityIndex::build(NAMES);
        let before = index.vocabulary_len();
        let _ = index.score("Unilever Rinso");
        assert_eq!(index.vocabulary_len(), before);
    }

    #[test]
    fn test_empty_index() {
        let index = SimilarityIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert!(index.score("anything").is_empty());
    }

    #[test]
    fn test_name_without_terms_scores_zero() {
        let index = SimilarityIndex::build(["A&W", "Nestle"]);
        assert_eq!(index.score("Nestle")[0], 0.0);
    }

    proptest! {
        #[test]
        fn prop_scores_within_unit_range(query in "[a-zA-Z ]{0,24}") {
            let index = SimilarityIndex::build(NAMES);
            let scores = index.score(&query);
            prop_assert_eq!(scores.len(), NAMES.len());
            for s in scores {
                prop_assert!((0.0..=1.0).contains(&s));
            }
        }

        #[test]
        fn prop_scoring_is_deterministic(query in "[a-zA-Z ]{0,24}") {
            let index = SimilarityIndex::build(NAMES);
            prop_assert_eq!(index.score(&query), index.score(&query));
        }
    }
}
