use std::io;

use thiserror::Error;

/// Errors raised by the report pipeline.
///
/// Probe and lookup failures never show up here: those are logged and turned
/// into empty results where they happen.
#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed size line {line:?}: {reason}")]
    Parse { line: String, reason: &'static str },
    #[error("sizes add up to more than {} bytes at {path:?}", u64::MAX)]
    SizeOverflow { path: String },
    #[error("percent must be between 0 and 100, got {0}")]
    PercentOutOfRange(f64),
    #[error("byte count must not be negative, got {0}")]
    NegativeSize(f64),
    #[error("byte count must be finite")]
    NonFiniteSize,
    #[error("failed to write report")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
