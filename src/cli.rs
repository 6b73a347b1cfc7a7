//! Command-line interface implementation for fsdgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for fsdgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "fsdgen: boilerplate generator for feature-sliced front-end projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to fsdgen.json, fsdgen.yml or fsdgen.yaml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a component with the index/types/styles pattern
    Component {
        /// Base path for the component (e.g., ./src/shared/ui)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Component name in PascalCase (e.g., Button)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Create the feature-sliced folder structure
    Structure {
        /// Project root directory (e.g., ./src)
        #[arg(value_name = "PROJECT_ROOT")]
        project_root: PathBuf,

        /// Feature slices to create (e.g., --slices cart auth user)
        #[arg(long, num_args = 0.., value_name = "NAME")]
        slices: Option<Vec<String>>,
    },

    /// Create a service/hook pair for one resource
    Service {
        /// Feature path (e.g., ./src/features/auth)
        #[arg(value_name = "FEATURE_PATH")]
        feature_path: PathBuf,

        /// Service name (e.g., auth, cart)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Create a state store with selectors and actions
    Store {
        /// Feature path (e.g., ./src/features/cart)
        #[arg(value_name = "FEATURE_PATH")]
        feature_path: PathBuf,

        /// Store name (e.g., cart, theme)
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if a required argument or the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
