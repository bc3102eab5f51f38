//! Configuration loading and schema definitions
//!
//! Settings for the document source, the matching policy, the catalog cache
//! and logging.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
