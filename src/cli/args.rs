/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// humctl — manage Humanitec applications.
#[derive(Debug, Parser)]
#[command(
    name = "humctl",
    about = "A command line interface wrapper for the Humanitec platform",
    long_about = "A command line interface wrapper for the Humanitec platform that provides \
                  basic CRUD operations for managing applications.",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Config file (YAML). Defaults to ./config.yaml.
    #[arg(short, long, global = true, value_name = "PATH", env = "HUMCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The config path to read, and whether the user named it explicitly.
    #[must_use]
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get one application by id, or list all applications.
    Get(GetArgs),
    /// Add an application to the organization.
    #[command(
        visible_alias = "create",
        long_about = "Add a new application to the organization.\n\nThe application id is \
                      derived from the name (lowercased, non-alphanumerics replaced by hyphens) \
                      unless --id is given. Ids must match ^[a-z0-9](?:-?[a-z0-9]+)+$."
    )]
    Add(AddArgs),
    /// Rename an application. The id is preserved.
    Update(UpdateArgs),
    /// Delete an application.
    #[command(
        long_about = "Delete an application and everything associated with it: environments, \
                      their deployment history, and any shared values and secrets.\n\n\
                      Deletions are irreversible."
    )]
    Delete(DeleteArgs),
}

impl Command {
    /// Subcommand name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Get(_) => "get",
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }

    /// The `--output`/`--org` flags of whichever subcommand was chosen.
    #[must_use]
    pub fn common(&self) -> &CommonArgs {
        match self {
            Self::Get(args) => &args.common,
            Self::Add(args) => &args.common,
            Self::Update(args) => &args.common,
            Self::Delete(args) => &args.common,
        }
    }
}

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Output format (table|json|yaml). Defaults to the configured default_output.
    #[arg(short, long, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Humanitec organization id. Defaults to humanitec_org / HUMANITEC_ORG.
    #[arg(short = 'g', long, value_name = "ORG")]
    pub org: Option<String>,
}

/// Arguments for `humctl get`.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Application id. Lists all applications when omitted.
    pub id: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for `humctl add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Display name of the application.
    #[arg(short, long)]
    pub name: String,

    /// Application id. Derived from the name when omitted.
    #[arg(long)]
    pub id: Option<String>,

    /// Do not create the default development environment.
    #[arg(short, long)]
    pub skip_env_creation: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for `humctl update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Current name (or id) of the application.
    #[arg(short, long)]
    pub name: String,

    /// New display name.
    #[arg(short = 'm', long)]
    pub new_name: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for `humctl delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Name (or id) of the application.
    #[arg(short, long)]
    pub name: String,

    #[command(flatten)]
    pub common: CommonArgs,
}
