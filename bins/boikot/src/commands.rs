//! Subcommand implementations.
//!
//! Each command returns the process exit code.

use crate::render;
use crate::OutputFormat;
use boikot_cli::output::format_duration;
use boikot_core::exit_codes;
use boikot_engine::{load_text, parse, BrandChecker, DocumentSource, Outcome, QueryResult};
use boikot_telemetry::Timer;
use std::io::BufRead;

/// Check a single brand.
pub fn check(
    checker: &BrandChecker,
    source: &dyn DocumentSource,
    brand: &str,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let timer = Timer::start("check");
    let result = checker.check(source, brand)?;
    let elapsed = timer.stop();

    tracing::info!(
        brand,
        outcome = ?result.outcome,
        elapsed = %format_duration(elapsed),
        "Checked brand"
    );

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => render::result(&result),
    }

    Ok(exit_code(&result))
}

/// Print every parsed record.
pub fn records(source: &dyn DocumentSource, format: OutputFormat) -> anyhow::Result<i32> {
    let records = load_text(source)?.map(|text| parse(&text)).unwrap_or_default();

    if records.is_empty() {
        let result = QueryResult::source_unavailable();
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Text => render::result(&result),
        }
        return Ok(exit_codes::SOURCE_UNAVAILABLE);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => render::records(&records),
    }

    Ok(exit_codes::SUCCESS)
}

/// Answer one brand per stdin line until end of input.
///
/// The brand list is re-read for every line so edits are picked up; the
/// catalog cache, when enabled, skips re-indexing unchanged text.
pub fn interactive(
    checker: &BrandChecker,
    source: &dyn DocumentSource,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let stdin = std::io::stdin();
    let mut answered = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        let brand = line.as_str();
        if brand.trim().is_empty() {
            continue;
        }

        let result = checker.check(source, brand)?;
        answered += 1;

        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
            OutputFormat::Text => {
                println!("> {}", brand);
                render::result(&result);
            }
        }
    }

    tracing::debug!(answered, "Interactive session finished");
    Ok(exit_codes::SUCCESS)
}

fn exit_code(result: &QueryResult) -> i32 {
    match result.outcome {
        Outcome::Accepted => exit_codes::SUCCESS,
        Outcome::NotFound => exit_codes::NOT_FOUND,
        Outcome::SourceUnavailable => exit_codes::SOURCE_UNAVAILABLE,
    }
}
