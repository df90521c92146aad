/// `get` command: fetch one application, or list all of them.
use tracing::debug;

use super::CommandError;
use crate::api::Client;
use crate::cli::OutputFormat;
use crate::cli::args::GetArgs;
use crate::cli::output::{format_app, format_apps};

/// Run `humctl get [ID]`.
///
/// # Errors
///
/// Returns `CommandError::GetApp`/`GetApps` when the API call fails, or
/// `CommandError::FormatOutput` when rendering fails.
pub fn run(
    args: &GetArgs,
    client: &impl Client,
    format: OutputFormat,
) -> Result<String, CommandError> {
    if let Some(id) = &args.id {
        let app = client.get_app(id).map_err(CommandError::GetApp)?;
        return format_app(&app, format).map_err(CommandError::FormatOutput);
    }

    let apps = client.list_apps().map_err(CommandError::GetApps)?;
    debug!(count = apps.len(), "listed applications");
    format_apps(&apps, format).map_err(CommandError::FormatOutput)
}
