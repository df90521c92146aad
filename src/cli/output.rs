/// Output formatting: table, JSON, YAML. Everything renders to a `String`
/// first so a failed command never leaves partial output on stdout.
use std::fmt::{self, Write as _};
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::types::{Application, ErrorOutput};

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated `NAME\tID` table.
    #[default]
    Table,
    /// Pretty-printed JSON, 2-space indent.
    Json,
    /// YAML document.
    Yaml,
}

impl OutputFormat {
    /// Every accepted format, in the order they are listed to users.
    pub const ALL: [Self; 3] = [Self::Table, Self::Json, Self::Yaml];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OutputError::UnsupportedFormat(s.to_owned()))
    }
}

/// Errors from the formatting layer.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unsupported output format: {0}. Supported formats: table, json, yaml")]
    UnsupportedFormat(String),

    #[error("failed to marshal to {format}: {message}")]
    Serialize {
        format: OutputFormat,
        message: String,
    },
}

/// Parse a user-supplied format name (case-insensitive).
///
/// # Errors
///
/// Returns `OutputError::UnsupportedFormat` for anything outside table/json/yaml.
pub fn validate_format(format: &str) -> Result<OutputFormat, OutputError> {
    format.parse()
}

/// Render a single application.
///
/// # Errors
///
/// Returns `OutputError::Serialize` if JSON/YAML serialization fails.
pub fn format_app(app: &Application, format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Table => Ok(app_table(std::slice::from_ref(app))),
        _ => serialize(app, format),
    }
}

/// Render a list of applications.
///
/// # Errors
///
/// Returns `OutputError::Serialize` if JSON/YAML serialization fails.
pub fn format_apps(apps: &[Application], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Table => Ok(app_table(apps)),
        _ => serialize(apps, format),
    }
}

/// Render a plain status message. JSON/YAML wrap it as `{message: ...}`.
///
/// # Errors
///
/// Returns `OutputError::Serialize` if JSON/YAML serialization fails.
pub fn format_message(message: &str, format: OutputFormat) -> Result<String, OutputError> {
    #[derive(Serialize)]
    struct Message<'a> {
        message: &'a str,
    }

    match format {
        OutputFormat::Table => Ok(format!("{message}\n")),
        _ => serialize(&Message { message }, format),
    }
}

fn app_table(apps: &[Application]) -> String {
    let mut out = String::from("NAME\tID\n----\t--\n");
    for app in apps {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}\t{}", app.name, app.id);
    }
    out
}

/// JSON gets an explicit trailing newline; YAML already ends with one.
fn serialize<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, OutputError> {
    let err = |message: String| OutputError::Serialize { format, message };
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .map_err(|e| err(e.to_string())),
        OutputFormat::Yaml => serde_yaml_ng::to_string(value).map_err(|e| err(e.to_string())),
        OutputFormat::Table => Err(err("table output is not a serializer".to_owned())),
    }
}

// --- Error output ---

/// Write a structured error to stderr in the requested format.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = out.write_all(render_error(err, format).as_bytes());
}

fn render_error(err: &ErrorOutput, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format!("Error: {}\n", err.error.message),
        _ => serialize(err, format).unwrap_or_else(|_| format!("Error: {}\n", err.error.message)),
    }
}
