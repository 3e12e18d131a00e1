//! Construction-time configuration and its mutators

use std::fs::OpenOptions;
use std::path::PathBuf;

use crate::channel::LineFlags;
use crate::error::ConfigError;
use crate::sink::MemorySink;

/// Where derived channels write.
#[derive(Debug)]
pub(crate) enum Target {
    /// The process's standard-error stream.
    Stderr,
    /// A file opened for append.
    File(std::fs::File),
    /// A caller-owned in-memory buffer.
    Memory(MemorySink),
}

/// Configuration under construction.
///
/// Lives only while options apply; channel derivation consumes it, so no
/// channel can observe a later mutation.
#[derive(Debug)]
pub(crate) struct LogOptions {
    pub(crate) target: Target,
    pub(crate) debug: bool,
    pub(crate) info: bool,
    pub(crate) flags: LineFlags,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            target: Target::Stderr,
            debug: true,
            info: true,
            flags: LineFlags::DATE | LineFlags::TIME,
        }
    }
}

/// One configuration mutator, applied in caller order during construction.
///
/// Options compose in any subset and any order; a later target option wins
/// over an earlier one.
#[derive(Debug)]
pub enum LogOption {
    /// Enable or disable the debug channel.
    Debug(bool),
    /// Enable or disable the info channel.
    Info(bool),
    /// Send output to the named file, opened for append and created if
    /// absent. Opening happens when the option is applied; failure aborts
    /// construction.
    File(PathBuf),
    /// Send output to a caller-owned in-memory buffer.
    Buffer(MemorySink),
}

impl LogOption {
    /// Convenience for [`LogOption::File`] from anything path-like.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub(crate) fn apply(self, options: &mut LogOptions) -> Result<(), ConfigError> {
        match self {
            LogOption::Debug(enabled) => options.debug = enabled,
            LogOption::Info(enabled) => options.info = enabled,
            LogOption::File(path) => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(&path)
                    .map_err(|source| ConfigError::Io {
                        path: path.clone(),
                        source,
                    })?;
                options.target = Target::File(file);
            }
            LogOption::Buffer(sink) => options.target = Target::Memory(sink),
        }
        Ok(())
    }
}
