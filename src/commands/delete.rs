/// `delete` command: remove an application.
use super::{CommandError, target_id};
use crate::api::Client;
use crate::cli::OutputFormat;
use crate::cli::args::DeleteArgs;
use crate::cli::output::format_message;

pub const DELETED_MESSAGE: &str = "Application successfully deleted";

/// Run `humctl delete --name N`.
///
/// # Errors
///
/// Returns `CommandError::DeleteApp` when the API call fails.
pub fn run(
    args: &DeleteArgs,
    client: &impl Client,
    format: OutputFormat,
) -> Result<String, CommandError> {
    let id = target_id("name", &args.name)?;
    client.delete_app(&id).map_err(CommandError::DeleteApp)?;
    format_message(DELETED_MESSAGE, format).map_err(CommandError::FormatOutput)
}
