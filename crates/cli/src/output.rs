//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print an indented list item
    pub fn item(message: &str) {
        println!("  • {}", message);
    }
}

/// Kind of verdict badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Red, boycotted
    Danger,
    /// Green, safe
    Safe,
    /// Dimmed, unknown
    Neutral,
}

/// Render `label` as a coloured badge, e.g. `[BOIKOT]`.
pub fn badge(label: &str, kind: Badge) -> String {
    let text = format!("[{}]", label.to_uppercase());
    match kind {
        Badge::Danger => text.red().bold().to_string(),
        Badge::Safe => text.green().bold().to_string(),
        Badge::Neutral => text.dimmed().to_string(),
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 0.001 {
        format!("{}µs", duration.as_micros())
    } else if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{:.1}s", secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
