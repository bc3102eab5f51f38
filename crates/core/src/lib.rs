//! Core utilities for the boikot brand checker
//!
//! This crate provides functionality shared by the matching engine and the
//! command-line front end:
//!
//! - **Error handling**: Structured errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use boikot_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("threshold = {}", config.schema.matching.threshold);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{exit_codes, Error, ErrorCode, Result, ResultExt};
