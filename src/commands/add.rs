/// `add` command (alias `create`): create an application.
use super::{CommandError, require};
use crate::api::Client;
use crate::cli::OutputFormat;
use crate::cli::args::AddArgs;
use crate::cli::output::format_app;
use crate::types::{NewApplication, is_valid_app_id, slugify};

/// Build the create request. Runs before any network call.
///
/// # Errors
///
/// Returns `CommandError::EmptyArgument` for a blank name, or
/// `CommandError::InvalidId` when the explicit or derived id is not a slug.
pub fn new_application(args: &AddArgs) -> Result<NewApplication, CommandError> {
    let name = require("name", &args.name)?;
    let id = args.id.clone().unwrap_or_else(|| slugify(name));
    if !is_valid_app_id(&id) {
        return Err(CommandError::InvalidId { id });
    }
    Ok(NewApplication {
        id,
        name: name.to_owned(),
        skip_env_creation: args.skip_env_creation,
    })
}

/// Run `humctl add --name N [--id I] [--skip-env-creation]`.
///
/// # Errors
///
/// Returns `CommandError` on invalid arguments, API failure, or a
/// formatting failure.
pub fn run(
    args: &AddArgs,
    client: &impl Client,
    format: OutputFormat,
) -> Result<String, CommandError> {
    let request = new_application(args)?;
    let app = client.create_app(&request).map_err(CommandError::AddApp)?;
    format_app(&app, format).map_err(CommandError::FormatOutput)
}
