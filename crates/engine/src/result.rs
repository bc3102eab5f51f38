//! Query results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline shown when no brand matched.
pub const NOT_FOUND_MESSAGE: &str = "Brand tidak ditemukan.";

/// Headline shown when the brand list could not be read or was empty.
pub const SOURCE_UNAVAILABLE_MESSAGE: &str = "File PDF tidak valid atau tidak ditemukan.";

/// Terminal state of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A record cleared the similarity threshold
    Accepted,
    /// No record cleared the threshold, or the query was too short
    NotFound,
    /// The brand list yielded no records
    SourceUnavailable,
}

/// Classification shown next to an accepted brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    /// Boycotted
    Boikot,
    /// Any other status
    Aman,
    /// Nothing matched
    #[default]
    None,
}

impl StatusClass {
    /// Classify a stored status. Only `boikot` (any case) is boycotted.
    pub fn classify(status: &str) -> Self {
        if status.to_lowercase() == "boikot" {
            StatusClass::Boikot
        } else {
            StatusClass::Aman
        }
    }

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Boikot => "boikot",
            StatusClass::Aman => "aman",
            StatusClass::None => "none",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one brand lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Terminal state
    pub outcome: Outcome,
    /// Stored name of the accepted record
    pub matched_name: Option<String>,
    /// Stored status of the accepted record
    pub status: Option<String>,
    /// Same-category substitutes, only for boycotted brands
    pub recommendations: Option<Vec<String>>,
    /// Classification of the accepted record
    pub status_class: StatusClass,
    /// Closest known name when nothing was accepted
    pub fuzzy_suggestion: Option<String>,
}

impl QueryResult {
    /// Nothing matched and there is nothing to suggest.
    pub fn not_found() -> Self {
        Self {
            outcome: Outcome::NotFound,
            matched_name: None,
            status: None,
            recommendations: None,
            status_class: StatusClass::None,
            fuzzy_suggestion: None,
        }
    }

    /// Nothing matched; `suggestion` is the closest known name, if any.
    pub fn suggest(suggestion: Option<String>) -> Self {
        Self {
            fuzzy_suggestion: suggestion,
            ..Self::not_found()
        }
    }

    /// The brand list was missing, unreadable or empty.
    pub fn source_unavailable() -> Self {
        Self {
            outcome: Outcome::SourceUnavailable,
            ..Self::not_found()
        }
    }

    /// True when the accepted brand is boycotted.
    pub fn is_boycotted(&self) -> bool {
        self.status_class == StatusClass::Boikot
    }

    /// User-facing headline: the matched name or a fixed message.
    pub fn message(&self) -> &str {
        match self.outcome {
            Outcome::Accepted => self.matched_name.as_deref().unwrap_or(NOT_FOUND_MESSAGE),
            Outcome::NotFound => NOT_FOUND_MESSAGE,
            Outcome::SourceUnavailable => SOURCE_UNAVAILABLE_MESSAGE,
        }
    }
}
