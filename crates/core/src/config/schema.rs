//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Where the extracted brand list lives
    #[serde(default)]
    pub source: SourceConfig,

    /// Similarity and fallback policy
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Parsed-catalog cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Document source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the text extracted from the boycott list PDF
    #[serde(default = "default_document")]
    pub document: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
        }
    }
}

fn default_document() -> String {
    "static/Produk.txt".to_string()
}

/// Matching policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum cosine similarity for a record to be accepted
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Queries with fewer characters are never matched
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Minimum edit-distance ratio for a fuzzy suggestion
    #[serde(default)]
    pub fuzzy_min_ratio: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_query_chars: default_min_query_chars(),
            fuzzy_min_ratio: 0.0,
        }
    }
}

fn default_threshold() -> f64 {
    0.7
}

fn default_min_query_chars() -> usize {
    2
}

/// Catalog cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Keep parsed records and the built index between queries
    #[serde(default)]
    pub enabled: bool,

    /// Maximum number of distinct documents kept
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    8
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of the compact format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "warn".to_string()
}
