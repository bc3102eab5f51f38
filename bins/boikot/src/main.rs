//! boikot: check whether a brand is on the boycott list.
//!
//! Reads the text extracted from the boycott list PDF and answers one brand
//! per invocation, or one brand per stdin line in interactive mode.

use boikot_cli::output::Status;
use boikot_core::config::Config;
use boikot_core::exit_codes;
use boikot_engine::{BrandChecker, TextFile};
use boikot_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod render;

/// Boycott list lookup with typo tolerance and alternatives
#[derive(Parser)]
#[command(name = "boikot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .boikot.toml if present)
    #[arg(short, long, global = true, env = "BOIKOT_CONFIG")]
    config: Option<String>,

    /// Extracted brand list text (overrides source.document)
    #[arg(short, long, global = true, env = "BOIKOT_DOCUMENT")]
    document: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one brand name
    Check {
        /// Brand name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        brand: Vec<String>,
    },

    /// List every record parsed from the brand list
    Records,

    /// Read brand names from stdin, one per line
    Interactive,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            render::failure(&err.to_report(), cli.format);
            return exit(exit_codes::CONFIG_ERROR);
        }
    };

    let logging = &config.schema.logging;
    let level = if cli.verbose { "debug" } else { logging.level.as_str() };
    let telemetry = TelemetryConfig::with_level(level, logging.json);
    if let Err(err) = boikot_telemetry::init_with_config(telemetry) {
        Status::warning(&err.to_string());
    }

    let document = cli
        .document
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.schema.source.document));
    let source = TextFile::new(document);
    let checker = BrandChecker::from_config(&config.schema.matching, &config.schema.cache);

    tracing::debug!(
        config = ?config.path,
        document = %source.path().display(),
        cache = checker.cache().is_some(),
        "Starting"
    );

    let result = match cli.command {
        Commands::Check { brand } => {
            commands::check(&checker, &source, &brand.join(" "), cli.format)
        }
        Commands::Records => commands::records(&source, cli.format),
        Commands::Interactive => commands::interactive(&checker, &source, cli.format),
    };

    match result {
        Ok(code) => exit(code),
        Err(err) => {
            let report = match err.downcast_ref::<boikot_core::Error>() {
                Some(core) => core.to_report(),
                None => boikot_core::Error::internal(format!("{:#}", err)).to_report(),
            };
            render::failure(&report, cli.format);
            exit(exit_codes::FAILURE)
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
