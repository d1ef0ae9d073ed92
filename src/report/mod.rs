//! Output document layout and console reporting.

pub mod generator;
pub mod progress;

pub use progress::{ConsoleReporter, Reporter};
