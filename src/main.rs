//! tsx-extract - combine a project's .tsx sources into one text file
//!
//! Walks `./src`, copies every `.tsx` file into `./all_tsx_files.txt` with a
//! header naming its relative path, and prints progress as it goes.
//!
//! Exit codes:
//!   0 - Always, for every pipeline outcome. Missing `src`, an empty tree and
//!       output write failures are reported on stdout.

mod aggregate;
mod cli;
mod config;
mod error;
mod models;
mod report;
mod scanner;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use cli::Args;
use config::ExtractConfig;
use error::ExtractError;
use models::RunOutcome;
use report::{ConsoleReporter, Reporter};
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        return Ok(());
    }

    // Initialize logging
    init_logging(&args);

    info!("tsx-extract v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let config = ExtractConfig::default();
    let mut reporter = ConsoleReporter::new(config.extension.clone());
    reporter.start(&config.root_dir);

    let outcome = std::env::current_dir()
        .map_err(ExtractError::WorkingDir)
        .and_then(|working_dir| run_extract(&working_dir, &config, &mut reporter));

    match outcome {
        Ok(RunOutcome::NoFiles) => reporter.no_files(&config.root_dir),
        Ok(RunOutcome::Completed(summary)) => {
            info!(
                "Wrote {} ({} processed, {} failed)",
                summary.output_path.display(),
                summary.processed,
                summary.failed
            );
        }
        Err(e) => {
            error!("Extraction failed: {}", e);
            reporter.error(&e);
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the locate, discover and aggregate stages for `working_dir`.
///
/// Nothing is written unless at least one file was discovered.
fn run_extract(
    working_dir: &Path,
    config: &ExtractConfig,
    reporter: &mut dyn Reporter,
) -> Result<RunOutcome, ExtractError> {
    let file_scanner = scanner::FileScanner::new(working_dir.to_path_buf(), config.clone());

    let root = file_scanner.locate_root()?;
    let entries = file_scanner.scan(&root);

    if entries.is_empty() {
        return Ok(RunOutcome::NoFiles);
    }

    reporter.discovered(entries.len());

    let summary = aggregate::aggregate(working_dir, config, &entries, reporter)?;
    reporter.finished(&summary);

    Ok(RunOutcome::Completed(summary))
}
