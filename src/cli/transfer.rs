//! CLI commands for CSV import and export

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::{PricingError, PricingResult};
use crate::export::HeaderLanguage;
use crate::ledger::Ledger;
use crate::storage::KeyValueStore;

/// Arguments for `export`
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Output file or directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Header row language (default: from settings)
    #[arg(long, value_enum)]
    pub header: Option<HeaderLanguage>,

    /// Write the CSV to stdout instead of a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Import charges from a CSV file; nothing is added if the file is unreadable
pub fn handle_import_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    file: &Path,
) -> PricingResult<()> {
    let reader = File::open(file).map_err(|e| {
        PricingError::ImportParse(format!("Failed to open {}: {}", file.display(), e))
    })?;

    let count = ledger.import(BufReader::new(reader))?;
    println!("Imported {} record(s) from {}", count, file.display());

    Ok(())
}

/// Export every charge to CSV
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: ExportArgs,
) -> PricingResult<()> {
    let language = args.header.unwrap_or(settings.header_language);
    let export = ledger.export(language, &settings.export_prefix)?;

    if args.stdout {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(export.contents.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let target = match args.output {
        Some(path) if path.is_dir() => path.join(&export.filename),
        Some(path) => path,
        None => PathBuf::from(&export.filename),
    };

    std::fs::write(&target, export.contents.as_bytes()).map_err(|e| {
        PricingError::Export(format!("Failed to write {}: {}", target.display(), e))
    })?;

    println!(
        "Exported {} record(s) to {}",
        ledger.records().len(),
        target.display()
    );

    Ok(())
}
