//! Construction error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while applying construction options.
///
/// Construction is the only fallible surface of the crate; channel writes,
/// banner printing, and muting never fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file-output option could not open its path.
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
