//! Aggregation of discovered files into one document.

pub mod aggregator;
pub mod document;

pub use aggregator::*;
