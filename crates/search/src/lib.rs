//! Similarity search over brand names.
//!
//! This crate provides:
//! - Regex tokenization shared by indexing and querying
//! - A TF-IDF index with cosine scoring
//! - Levenshtein edit distance and ratio-based fuzzy suggestions
//!
//! # Example
//!
//! ```
//! use boikot_search::{best_match, SimilarityIndex};
//!
//! let names = ["Nestle", "Indofood"];
//! let index = SimilarityIndex::build(names);
//!
//! let scores = index.score("nestle");
//! assert!(scores[0] > 0.99);
//!
//! let suggestion = best_match("Nestel", names).unwrap();
//! assert_eq!(suggestion.candidate, "Nestle");
//! ```

mod fuzzy;
mod tfidf;

pub use fuzzy::{best_match, best_match_above, levenshtein_distance, similarity_ratio, FuzzyMatch};
pub use tfidf::{tokenize, SimilarityIndex};
