//! Text rendering for results.

use crate::OutputFormat;
use boikot_cli::output::{badge, format_count, Badge, Status};
use boikot_core::error::ErrorReport;
use boikot_engine::{Outcome, QueryResult, RecordSet, StatusClass};

/// Print a query result.
pub fn result(result: &QueryResult) {
    match result.outcome {
        Outcome::Accepted => accepted(result),
        Outcome::NotFound => {
            Status::error(result.message());
            if let Some(suggestion) = &result.fuzzy_suggestion {
                Status::info(&format!("Did you mean: {}?", suggestion));
            }
        }
        Outcome::SourceUnavailable => Status::warning(result.message()),
    }
}

fn accepted(result: &QueryResult) {
    let kind = match result.status_class {
        StatusClass::Boikot => Badge::Danger,
        StatusClass::Aman => Badge::Safe,
        StatusClass::None => Badge::Neutral,
    };
    println!("{} {}", result.message(), badge(result.status_class.as_str(), kind));

    if let Some(status) = &result.status {
        println!("Status: {}", status);
    }

    if let Some(recommendations) = &result.recommendations {
        if recommendations.is_empty() {
            println!("No alternatives listed in this category.");
        } else {
            Status::header(&format!(
                "Alternatives ({})",
                format_count(recommendations.len(), "brand", "brands")
            ));
            for name in recommendations {
                Status::item(name);
            }
        }
    }
}

/// Print the parsed record table.
pub fn records(records: &RecordSet) {
    let name_width = records
        .names()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Brand".len());
    let status_width = records
        .iter()
        .map(|r| r.status().chars().count())
        .max()
        .unwrap_or(0)
        .max("Status".len());

    println!("{:<name_width$}  {:<status_width$}  Category", "Brand", "Status");
    for record in records {
        println!(
            "{:<name_width$}  {:<status_width$}  {}",
            record.name(),
            record.status(),
            record.category()
        );
    }
    println!();
    println!("{}", format_count(records.len(), "record", "records"));
}

/// Print an unexpected failure.
pub fn failure(report: &ErrorReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => eprintln!("{}", json),
            Err(_) => eprintln!("{}: {}", report.code_str, report.message),
        },
        OutputFormat::Text => {
            Status::error("Something went wrong while checking the brand list.");
            eprintln!("  [{}] {}", report.code_str, report.message);
            if let Some(context) = &report.context {
                eprintln!("  Context: {}", context);
            }
            if let Some(suggestion) = &report.suggestion {
                eprintln!("  Suggestion: {}", suggestion);
            }
        }
    }
}
