pub mod analysis;
pub mod series;

use std::io;

use thiserror::Error;

pub use crate::analysis::cross_correlation::{
    cross_correlation, CorrelationResult, CorrelogramEntry, InvalidArgument,
};

/// Errors from reading series data or running an analysis.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid value '{token}' on line {line}")]
    ParseSeries { line: usize, token: String },
}
