//! Turns similarity scores into a verdict.
//!
//! The best-scoring record is accepted when its score reaches the threshold.
//! Otherwise the query falls back to a fuzzy suggestion over every record
//! name. Recommendations are only gathered for boycotted brands.

use crate::record::{BrandRecord, RecordSet};
use crate::result::{Outcome, QueryResult, StatusClass};
use boikot_core::config::MatchingConfig;
use boikot_search::best_match_above;

/// Status that marks a brand as a valid substitute. Compared case-sensitively.
pub const RECOMMENDABLE_STATUS: &str = "Tidak";

/// Default minimum cosine similarity.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Default minimum query length in characters.
pub const DEFAULT_MIN_QUERY_CHARS: usize = 2;

/// Acceptance and fallback policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    /// Minimum cosine similarity for acceptance (inclusive)
    pub threshold: f64,
    /// Shorter queries are answered with "not found"
    pub min_query_chars: usize,
    /// Fuzzy candidates below this ratio are not suggested
    pub fuzzy_min_ratio: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            fuzzy_min_ratio: 0.0,
        }
    }
}

impl From<&MatchingConfig> for MatchPolicy {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            threshold: config.threshold,
            min_query_chars: config.min_query_chars,
            fuzzy_min_ratio: config.fuzzy_min_ratio,
        }
    }
}

/// Position and value of the first maximum. NaN never wins.
pub fn best_score(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    best
}

/// Resolve with the default policy.
pub fn resolve(records: &RecordSet, scores: &[f64], query: &str) -> QueryResult {
    resolve_with(&MatchPolicy::default(), records, scores, query)
}

/// Resolve a query given scores aligned with `records`.
pub fn resolve_with(
    policy: &MatchPolicy,
    records: &RecordSet,
    scores: &[f64],
    query: &str,
) -> QueryResult {
    if query.chars().count() < policy.min_query_chars {
        tracing::debug!(query, "Query too short");
        return QueryResult::not_found();
    }

    let accepted = best_score(scores)
        .filter(|&(_, score)| score >= policy.threshold)
        .and_then(|(index, score)| records.get(index).map(|record| (record, score)));

    match accepted {
        Some((record, score)) => {
            tracing::debug!(query, matched = record.name(), score, "Accepted match");
            accept(records, record)
        }
        None => {
            let suggestion = best_match_above(query, records.names(), policy.fuzzy_min_ratio)
                .map(|found| found.candidate.to_string());
            tracing::debug!(query, suggestion = ?suggestion, "No match above threshold");
            QueryResult::suggest(suggestion)
        }
    }
}

fn accept(records: &RecordSet, matched: &BrandRecord) -> QueryResult {
    let status_class = StatusClass::classify(matched.status());
    let recommendations = (status_class == StatusClass::Boikot)
        .then(|| recommendations_for(records, matched.category()));

    QueryResult {
        outcome: Outcome::Accepted,
        matched_name: Some(matched.name().to_string()),
        status: Some(matched.status().to_string()),
        recommendations,
        status_class,
        fuzzy_suggestion: None,
    }
}

/// Names of recommendable records in `category`, in record order.
pub fn recommendations_for(records: &RecordSet, category: &str) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.status() == RECOMMENDABLE_STATUS && r.category() == category)
        .map(|r| r.name().to_string())
        .collect()
}
