//! Error types shared by the readers, the distributions and the driver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the analysis.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid interpolation table: {0}")]
    Interpolator(String),

    /// The distribution has no mass left to normalize.
    #[error("distribution has zero total mass")]
    EmptyDistribution,

    #[error("degenerate distribution: {0}")]
    Degenerate(String),

    #[error("plotting failed: {0}")]
    Plot(String),
}

/// The reason a single table row was rejected. These are counted, not
/// propagated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing column {0}")]
    MissingColumn(usize),

    #[error("not an integer: {0:?}")]
    BadInteger(String),

    #[error("expected 2 fields, found {0}")]
    FieldCount(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
