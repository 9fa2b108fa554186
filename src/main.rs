use anyhow::Result;
use clap::{Parser, Subcommand};
use stockr::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for stockr::AppCommand {
    fn from(cmd: Commands) -> stockr::AppCommand {
        match cmd {
            Commands::Session => stockr::AppCommand::Session,
            Commands::List => stockr::AppCommand::List,
            Commands::Show { name } => stockr::AppCommand::Show { name },
            Commands::Stats => stockr::AppCommand::Stats,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Start an interactive session (default)
    Session,
    /// List products
    List,
    /// Display details of a product
    Show {
        /// Name of the product
        name: String,
    },
    /// Display inventory statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => stockr::cli::setup::run(cli.config_path.as_deref()),
        Some(cmd) => stockr::run_command(cmd.into(), cli.config_path.as_deref()),
        None => stockr::run_command(stockr::AppCommand::Session, cli.config_path.as_deref()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
