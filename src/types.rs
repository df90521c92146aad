/// Shared serializable types: the application record and the error envelope.
///
/// `Application` is both the wire shape of the Humanitec API and what gets
/// rendered to stdout. Field order matters: JSON and YAML output list `id`
/// before `name`.
use serde::{Deserialize, Serialize};

use crate::commands::CommandError;

/// A Humanitec application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Slug identifier, unique within the organization.
    pub id: String,
    /// Human-friendly display name.
    pub name: String,
}

/// Request body for creating an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    pub id: String,
    pub name: String,
    /// Skip creation of the default `development` environment.
    #[serde(rename = "skip_environment_creation")]
    pub skip_env_creation: bool,
}

/// Derive an application id from a display name.
///
/// Lowercases ASCII alphanumerics and collapses every other run of characters
/// into a single hyphen: `"My Cool App!"` becomes `"my-cool-app"`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Whether `id` matches `^[a-z0-9](?:-?[a-z0-9]+)+$`.
#[must_use]
pub fn is_valid_app_id(id: &str) -> bool {
    let bytes = id.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    let word = |b: &u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !word(&bytes[0]) || !word(&bytes[bytes.len() - 1]) {
        return false;
    }
    bytes
        .windows(2)
        .all(|w| (word(&w[0]) || w[0] == b'-') && (word(&w[1]) || (w[1] == b'-' && w[0] != b'-')))
}

/// A structured error envelope for JSON/YAML error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CommandError`.
    #[must_use]
    pub fn from_command_error(err: &CommandError) -> Self {
        Self::new(err.code(), err.to_string())
    }

    /// Construct from a code and message.
    #[must_use]
    pub fn new(code: &str, message: String) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message,
            },
        }
    }
}
