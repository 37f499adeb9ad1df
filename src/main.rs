use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use transfer_pricing::cli::{
    handle_catalog_command, handle_charge_command, handle_crosstab_command,
    handle_export_command, handle_import_command, ChargeCommands, ExportArgs,
};
use transfer_pricing::config::{PricingPaths, Settings};
use transfer_pricing::ledger::Ledger;
use transfer_pricing::logging;
use transfer_pricing::storage::FileKeyValueStore;

#[derive(Parser)]
#[command(
    name = "tp",
    version,
    about = "Intercompany transfer pricing ledger",
    long_about = "Records service charges between organizational units, \
                  summarizes them by service, provider and price across \
                  receiving units, and moves them in and out as CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Charge(ChargeCommands),

    /// Summarize quantities by service, provider and price per receiving unit
    #[command(alias = "summary")]
    Crosstab,

    /// Import charges from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Export all charges to CSV
    Export(ExportArgs),

    /// Show suggested providers, services and receivers
    Catalog,

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let paths = PricingPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let store = FileKeyValueStore::new(paths.data_dir());
    let mut ledger = Ledger::open(store, settings.storage_key.clone());

    match cli.command {
        Some(Commands::Charge(cmd)) => handle_charge_command(&mut ledger, cmd)?,
        Some(Commands::Crosstab) => handle_crosstab_command(&ledger)?,
        Some(Commands::Import { file }) => handle_import_command(&mut ledger, &file)?,
        Some(Commands::Export(args)) => handle_export_command(&ledger, &settings, args)?,
        Some(Commands::Catalog) => handle_catalog_command(&settings.catalog),
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Transfer Pricing Configuration");
            println!("==============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Storage key:     {}", settings.storage_key);
            println!("  Export prefix:   {}", settings.export_prefix);
            println!("  Header language: {:?}", settings.header_language);
            println!("  Records stored:  {}", ledger.records().len());
        }
        None => {
            println!("tp - intercompany transfer pricing ledger");
            println!();
            println!("Run 'tp --help' for usage information.");
        }
    }

    Ok(())
}
