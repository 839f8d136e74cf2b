mod commands;
mod config;
mod error;
mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::ToolConfig;
use error::ToolError;
use export::CatalogExport;
use mc_rs_blockdata::catalog;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "mc-rs-blockdata-tool",
    version,
    about = "Inspect and export the legacy block catalog"
)]
struct Cli {
    /// TOML config file; missing files fall back to defaults.
    #[arg(long, default_value = "blockdata.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log block type and variant counts.
    Summary,
    /// Print a block (`<id>`) or one variant (`<id>:<data>`).
    Lookup { reference: String },
    /// Resolve a block name or `<block>/<variant>`.
    Find { name: String },
    /// Write the catalog as JSON.
    Export { path: Option<PathBuf> },
}

fn main() {
    let cli = Cli::parse();

    let config = match ToolConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", cli.config.display());
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli.command.unwrap_or(Command::Summary), &config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command, config: &ToolConfig) -> Result<(), ToolError> {
    let catalog = catalog();
    match command {
        Command::Summary => commands::summary(catalog),
        Command::Lookup { reference } => print!("{}", line(commands::lookup(catalog, &reference)?)),
        Command::Find { name } => print!("{}", line(commands::find(catalog, &name)?)),
        Command::Export { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.export.path));
            let export = CatalogExport::new(catalog);
            let bytes = export.write(&path, config.export.pretty)?;
            info!(
                "Exported {} block types and {} variants to {} ({bytes} bytes)",
                export.block_count,
                export.variant_count,
                path.display()
            );
        }
    }
    Ok(())
}

/// Terminate `text` with a newline unless it already ends with one.
fn line(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
