pub mod cli;
pub mod core;

use crate::cli::{screens, session::Session};
use crate::core::ProductStore;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub enum AppCommand {
    Session,
    List,
    Show { name: String },
    Stats,
}

/// Loads the configuration, builds the store and runs `command` against the terminal.
pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("stockr starting...");

    let config = AppConfig::load_or_default(config_path)?;
    debug!("Loaded config: {config:#?}");

    let AppConfig { currency, products } = config;
    let mut store = ProductStore::with_products(products);

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(command, &mut store, &currency, stdin.lock(), stdout.lock())
}

/// Runs `command` against an existing store with the given I/O handles.
pub fn execute<R: BufRead, W: Write>(
    command: AppCommand,
    store: &mut ProductStore,
    currency: &str,
    input: R,
    mut output: W,
) -> Result<()> {
    match command {
        AppCommand::Session => Session::new(store, currency, input, output).run(),
        AppCommand::List => {
            writeln!(output, "{}", screens::product_list(store))?;
            Ok(())
        }
        AppCommand::Show { name } => {
            if store.find_by_name(&name).is_none() {
                anyhow::bail!("Product '{name}' not found");
            }
            writeln!(output, "{}", screens::product_details(store, &name, currency))?;
            Ok(())
        }
        AppCommand::Stats => {
            writeln!(output, "{}", screens::statistics(store, currency))?;
            Ok(())
        }
    }
}
