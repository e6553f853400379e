//! Output formatters for mapping reports.

use clap::ValueEnum;
use comfy_table::Table;
use flexbridge_core::MappingReport;

/// Output format for the mapped variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `export NAME='value'` lines, for `eval`
    Shell,
    /// `NAME="value"` lines, for dotenv files
    Dotenv,
    /// JSON object
    Json,
    /// ASCII table
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Shell => write!(f, "shell"),
            OutputFormat::Dotenv => write!(f, "dotenv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Trait for formatting output.
pub trait Formatter {
    /// Format the variables written by a mapping pass.
    fn format_report(&self, report: &MappingReport) -> String;
}

/// Create a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Shell => Box::new(ShellFormatter),
        OutputFormat::Dotenv => Box::new(DotenvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// POSIX shell formatter.
pub struct ShellFormatter;

impl Formatter for ShellFormatter {
    fn format_report(&self, report: &MappingReport) -> String {
        report
            .variables
            .iter()
            .map(|(name, value)| format!("export {}={}", name, shell_quote(value)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Dotenv formatter.
pub struct DotenvFormatter;

impl Formatter for DotenvFormatter {
    fn format_report(&self, report: &MappingReport) -> String {
        report
            .variables
            .iter()
            .map(|(name, value)| format!("{}={}", name, dotenv_quote(value)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &MappingReport) -> String {
        let mut vars = serde_json::Map::new();
        for (name, value) in &report.variables {
            vars.insert(name.clone(), serde_json::Value::String(value.clone()));
        }

        serde_json::json!({
            "phase": report.phase.as_str(),
            "variables": vars,
        })
        .to_string()
    }
}

/// Table formatter using comfy-table.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, report: &MappingReport) -> String {
        if report.is_empty() {
            return format!("No variables set (phase: {})", report.phase);
        }

        let mut table = Table::new();
        table.set_header(vec!["Variable", "Value"]);
        for (name, value) in &report.variables {
            table.add_row(vec![name.as_str(), value.as_str()]);
        }

        table.to_string()
    }
}

/// Single-quote a value for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

/// Double-quote a value for dotenv parsers.
pub fn dotenv_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
