/// Command dispatch: resolves format and credentials, builds the client, and
/// routes `Command` variants to their implementations.
pub mod add;
pub mod delete;
pub mod get;
pub mod update;

use std::io::Write;

use thiserror::Error;
use tracing::debug;

use crate::api::{ApiError, Client, Credentials};
use crate::cli::output::{OutputError, OutputFormat, validate_format};
use crate::cli::{Command, CommonArgs};
use crate::config::Config;
use crate::types::{is_valid_app_id, slugify};

/// Errors a command can fail with. Each names the step that failed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid output format: {0}")]
    InvalidFormat(#[source] OutputError),

    #[error("invalid {flag}: must not be empty")]
    EmptyArgument { flag: &'static str },

    #[error("invalid application id '{id}': must match ^[a-z0-9](?:-?[a-z0-9]+)+$")]
    InvalidId { id: String },

    #[error("failed to initialize client: {0}")]
    ClientInit(#[source] ApiError),

    #[error("failed to get applications: {0}")]
    GetApps(#[source] ApiError),

    #[error("failed to get application: {0}")]
    GetApp(#[source] ApiError),

    #[error("failed to add application: {0}")]
    AddApp(#[source] ApiError),

    #[error("failed to update application: {0}")]
    UpdateApp(#[source] ApiError),

    #[error("failed to delete application: {0}")]
    DeleteApp(#[source] ApiError),

    #[error("failed to format output: {0}")]
    FormatOutput(#[source] OutputError),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl CommandError {
    /// CLI exit code for every command failure.
    pub const EXIT_CODE: i32 = 1;

    /// Machine-readable code for the error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "invalid_output_format",
            Self::EmptyArgument { .. } => "invalid_argument",
            Self::InvalidId { .. } => "invalid_app_id",
            Self::ClientInit(e)
            | Self::GetApps(e)
            | Self::GetApp(e)
            | Self::AddApp(e)
            | Self::UpdateApp(e)
            | Self::DeleteApp(e) => e.code(),
            Self::FormatOutput(_) => "format_error",
            Self::Write(_) => "io_error",
        }
    }
}

/// Format and credentials resolved for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub format: OutputFormat,
    pub credentials: Credentials,
}

/// Resolve `--output` / `--org` against the config.
///
/// Format: flag, else `default_output`, else table. Org: flag, else config.
/// Blank values count as absent at every level.
///
/// # Errors
///
/// Returns `CommandError::InvalidFormat` when the chosen format is unknown.
pub fn resolve(common: &CommonArgs, config: &Config) -> Result<Invocation, CommandError> {
    let format = requested_format(common.output.as_deref(), config.default_output.as_deref())
        .map_err(CommandError::InvalidFormat)?;

    let org = common
        .org
        .clone()
        .filter(|org| !org.trim().is_empty())
        .unwrap_or_else(|| config.humanitec_org.clone());

    Ok(Invocation {
        format,
        credentials: Credentials {
            token: config.humanitec_token.clone(),
            org,
            api_url: config.api_url.clone(),
        },
    })
}

/// Pick the flag value, else the configured default, else table; blank
/// strings are skipped.
///
/// # Errors
///
/// Returns `OutputError::UnsupportedFormat` when the chosen name is unknown.
pub fn requested_format(
    flag: Option<&str>,
    default: Option<&str>,
) -> Result<OutputFormat, OutputError> {
    let present = |s: &&str| !s.trim().is_empty();
    match flag.filter(present).or(default.filter(present)) {
        Some(name) => validate_format(name.trim()),
        None => Ok(OutputFormat::default()),
    }
}

/// Best-effort format for reporting a failure: the requested one if it
/// parses, otherwise table.
#[must_use]
pub fn error_format(command: &Command, config: &Config) -> OutputFormat {
    resolve(command.common(), config).map_or(OutputFormat::Table, |inv| inv.format)
}

/// Reject a blank required flag value, returning it trimmed.
pub(crate) fn require<'a>(flag: &'static str, value: &'a str) -> Result<&'a str, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        Err(CommandError::EmptyArgument { flag })
    } else {
        Ok(value)
    }
}

/// Id an existing application is addressed by: the slug of its name or id.
pub(crate) fn target_id(flag: &'static str, value: &str) -> Result<String, CommandError> {
    let id = slugify(require(flag, value)?);
    if is_valid_app_id(&id) {
        Ok(id)
    } else {
        Err(CommandError::InvalidId { id })
    }
}

/// Dispatch a parsed `Command`: resolve, connect, run, then write the whole
/// rendered result to `out` in one go.
///
/// `connect` builds the client from the resolved credentials, so callers
/// choose the implementation.
///
/// # Errors
///
/// Returns `CommandError` from whichever step failed; nothing is written to
/// `out` in that case.
pub fn dispatch<C, F>(
    command: &Command,
    config: &Config,
    connect: F,
    out: &mut impl Write,
) -> Result<(), CommandError>
where
    C: Client,
    F: FnOnce(Credentials) -> Result<C, ApiError>,
{
    let Invocation {
        format,
        credentials,
    } = resolve(command.common(), config)?;
    debug!(
        command = command.name(),
        %format,
        org = %credentials.org,
        "dispatching"
    );

    let client = connect(credentials).map_err(CommandError::ClientInit)?;

    let rendered = match command {
        Command::Get(args) => get::run(args, &client, format)?,
        Command::Add(args) => add::run(args, &client, format)?,
        Command::Update(args) => update::run(args, &client, format)?,
        Command::Delete(args) => delete::run(args, &client, format)?,
    };

    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CommandError::Write)
}
