/// `update` command: rename an application.
use super::{CommandError, require, target_id};
use crate::api::Client;
use crate::cli::OutputFormat;
use crate::cli::args::UpdateArgs;
use crate::cli::output::format_app;

/// Run `humctl update --name N --new-name M`.
///
/// The application is addressed by the slug of `--name`, which is the id
/// itself when an id is passed. Only the display name changes.
///
/// # Errors
///
/// Returns `CommandError` on blank arguments, API failure, or a formatting
/// failure.
pub fn run(
    args: &UpdateArgs,
    client: &impl Client,
    format: OutputFormat,
) -> Result<String, CommandError> {
    let id = target_id("name", &args.name)?;
    let new_name = require("new-name", &args.new_name)?;
    let app = client
        .update_app(&id, new_name)
        .map_err(CommandError::UpdateApp)?;
    format_app(&app, format).map_err(CommandError::FormatOutput)
}
