//! Boycott list lookups for consumer brands.
//!
//! This crate provides:
//! - Parsing of extracted brand list text into records
//! - TF-IDF similarity matching with a configurable acceptance threshold
//! - Fuzzy "did you mean" suggestions when nothing matches
//! - Same-category substitutes for boycotted brands
//! - An optional content-hash keyed catalog cache
//!
//! # Example
//!
//! ```
//! use boikot_engine::{query_brand, Outcome};
//!
//! let text = "Nestle boikot Makanan\nIndofood Tidak Makanan\n";
//!
//! let typo = query_brand(text, "Nestel");
//! assert_eq!(typo.outcome, Outcome::NotFound);
//! assert_eq!(typo.fuzzy_suggestion.as_deref(), Some("Nestle"));
//! ```

pub mod cache;
pub mod catalog;
pub mod facade;
pub mod record;
pub mod resolver;
pub mod result;
pub mod source;

pub use cache::CatalogCache;
pub use catalog::Catalog;
pub use facade::{load_text, query_brand, BrandChecker};
pub use record::{parse, BrandRecord, RecordSet};
pub use resolver::{resolve, resolve_with, MatchPolicy};
pub use result::{
    Outcome, QueryResult, StatusClass, NOT_FOUND_MESSAGE, SOURCE_UNAVAILABLE_MESSAGE,
};
pub use source::{DocumentSource, InlineText, TextFile};
