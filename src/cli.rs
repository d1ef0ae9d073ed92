//! Command-line interface argument parsing.
//!
//! The tool takes no positional arguments. The only flags adjust the
//! diagnostic log level written to stderr.

use clap::Parser;

/// tsx-extract - combine every .tsx file under ./src into one text file
///
/// Run from the folder that contains `src`. Writes `all_tsx_files.txt`
/// next to it, one block per file, each headed by its relative path.
///
/// Examples:
///   tsx-extract
///   tsx-extract --verbose
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only in the log)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
