//! CLI utilities for the boikot tools
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Coloured verdict badges
//! - Count and duration formatting

#![warn(missing_docs)]

pub mod output;
