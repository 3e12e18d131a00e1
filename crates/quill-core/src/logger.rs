//! Logger construction and the channel bundle

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::channel::{Channel, LineFlags};
use crate::error::ConfigError;
use crate::options::{LogOption, LogOptions, Target};
use crate::sink::SharedSink;

const BANNER_RULE: &str = "--------------------------";

const DEBUG_PREFIX: &str = "DEBUG: ";
// Two trailing spaces keep columns aligned with DEBUG/ERROR lines.
const INFO_PREFIX: &str = "INFO:  ";
const ERROR_PREFIX: &str = "ERROR: ";
const ERROR_PREFIX_ANSI: &str = "\x1b[1;31mERROR: \x1b[0m";

/// Four independent output channels derived from one configuration.
///
/// Channels share a single sink; the error and banner channels always
/// emit, debug and info can be disabled at construction or muted later.
#[derive(Debug)]
pub struct Logger {
    pub debug: Channel,
    pub info: Channel,
    pub error: Channel,
    pub banner: Channel,
}

impl Logger {
    /// Build a logger by applying `options` in order to the defaults.
    ///
    /// The first failing option aborts construction; on error no bundle
    /// exists and nothing has been written.
    pub fn new(options: impl IntoIterator<Item = LogOption>) -> Result<Self, ConfigError> {
        let mut config = LogOptions::default();
        for option in options {
            option.apply(&mut config)?;
        }
        Ok(Self::derive(config))
    }

    /// A ready logger with every default; cannot fail.
    pub fn with_defaults() -> Self {
        Self::derive(LogOptions::default())
    }

    /// Pure function of the final configuration.
    fn derive(config: LogOptions) -> Self {
        // Decided once here, never re-evaluated per write.
        let colorize = matches!(config.target, Target::Stderr) && ansi_supported();
        let sink: SharedSink = match config.target {
            Target::Stderr => Arc::new(Mutex::new(io::stderr())),
            Target::File(file) => Arc::new(Mutex::new(file)),
            Target::Memory(buffer) => Arc::new(Mutex::new(buffer)),
        };

        let error_prefix = if colorize {
            ERROR_PREFIX_ANSI
        } else {
            ERROR_PREFIX
        };

        Logger {
            debug: if config.debug {
                Channel::bound(
                    Arc::clone(&sink),
                    DEBUG_PREFIX,
                    config.flags | LineFlags::SOURCE,
                )
            } else {
                Channel::muted()
            },
            info: if config.info {
                Channel::bound(Arc::clone(&sink), INFO_PREFIX, config.flags)
            } else {
                Channel::muted()
            },
            error: Channel::bound(
                Arc::clone(&sink),
                error_prefix,
                config.flags | LineFlags::SOURCE,
            ),
            banner: Channel::bound(sink, "", LineFlags::empty()),
        }
    }

    /// Print a three-line banner: rule, message, rule.
    ///
    /// Embedded newlines in `message` pass through verbatim.
    pub fn print_banner(&self, message: &str) {
        self.banner.println(BANNER_RULE);
        self.banner.println(message);
        self.banner.println(BANNER_RULE);
    }

    /// Permanently mute the debug channel. Idempotent; there is no way to
    /// turn it back on for this bundle.
    pub fn debug_off(&mut self) {
        self.debug = Channel::muted();
    }

    /// Permanently mute the info channel. Idempotent.
    pub fn info_off(&mut self) {
        self.info = Channel::muted();
    }
}

fn ansi_supported() -> bool {
    cfg!(not(windows))
}

/// Convenience macros for formatted channel writes
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug.printf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info.printf(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error.printf(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    fn buffered(options: Vec<LogOption>) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let mut all = vec![LogOption::Buffer(sink.clone())];
        all.extend(options);
        (Logger::new(all).unwrap(), sink)
    }

    #[test]
    fn banner_round_trip() {
        let (logger, sink) = buffered(vec![]);
        logger.print_banner("Test");
        assert_eq!(
            sink.as_string(),
            "--------------------------\nTest\n--------------------------\n"
        );
    }

    #[test]
    fn banner_passes_embedded_newlines_through() {
        let (logger, sink) = buffered(vec![]);
        logger.print_banner("one\ntwo");
        assert_eq!(
            sink.as_string(),
            "--------------------------\none\ntwo\n--------------------------\n"
        );
    }

    #[test]
    fn info_passthrough() {
        let (logger, sink) = buffered(vec![]);
        logger.info.println("Test");
        // Whole-word match: the message survives prefix and stamps intact.
        let output = sink.as_string();
        assert!(output.split_whitespace().any(|word| word == "Test"));
        assert!(output.starts_with("INFO:  "));
    }

    #[test]
    fn debug_disabled_at_construction_writes_nothing() {
        let (logger, sink) = buffered(vec![LogOption::Debug(false)]);
        logger.debug.println("one");
        log_debug!(logger, "{}", "two");
        assert!(sink.is_empty());
    }

    #[test]
    fn debug_off_mutes_after_construction() {
        let (mut logger, sink) = buffered(vec![]);
        logger.debug_off();
        logger.debug.println("gone");
        assert!(sink.is_empty());
    }

    #[test]
    fn muting_is_idempotent() {
        let (mut logger, sink) = buffered(vec![]);
        logger.debug_off();
        logger.debug_off();
        logger.debug.println("gone");

        logger.info_off();
        logger.info_off();
        logger.info.println("gone");

        assert!(sink.is_empty());
    }

    #[test]
    fn info_suppression_is_independent_of_debug() {
        let (logger, sink) = buffered(vec![LogOption::Info(false)]);
        logger.info.println("silent");
        assert!(sink.is_empty());

        logger.debug.println("still here");
        logger.error.println("also here");
        let output = sink.as_string();
        assert!(output.contains("still here"));
        assert!(output.contains("also here"));
        assert!(!output.contains("silent"));
    }

    #[test]
    fn debug_suppression_is_independent_of_info() {
        let (logger, sink) = buffered(vec![LogOption::Debug(false)]);
        logger.debug.println("silent");
        assert!(sink.is_empty());

        logger.info.println("still here");
        logger.error.println("also here");
        let output = sink.as_string();
        assert!(output.contains("still here"));
        assert!(output.contains("also here"));
    }

    #[test]
    fn last_target_option_wins() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let logger = Logger::new([
            LogOption::Buffer(first.clone()),
            LogOption::Buffer(second.clone()),
        ])
        .unwrap();

        logger.info.println("hello");
        assert!(first.is_empty());
        assert!(second.as_string().contains("hello"));
    }

    #[test]
    fn construction_failure_yields_no_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("quill.log");
        let result = Logger::new([LogOption::file(&path)]);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn failed_option_halts_before_later_options() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("missing").join("quill.log");
        let sink = MemorySink::new();
        let result = Logger::new([
            LogOption::file(&bad),
            LogOption::Buffer(sink.clone()),
        ]);
        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn error_channel_emits_to_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.log");
        let mut logger = Logger::new([
            LogOption::file(&path),
            LogOption::Debug(false),
            LogOption::Info(false),
        ])
        .unwrap();

        logger.error.println("boom");
        logger.debug_off();
        logger.error.println("boom again");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("boom"));
        assert!(contents.contains("boom again"));
        // File output never carries ANSI emphasis.
        assert!(contents.starts_with("ERROR: "));
        assert!(!contents.contains('\x1b'));
    }

    #[test]
    fn error_channel_emits_to_buffer_regardless_of_toggles() {
        let (logger, sink) = buffered(vec![LogOption::Debug(false), LogOption::Info(false)]);
        logger.error.println("boom");
        assert!(sink.as_string().contains("boom"));
    }

    #[test]
    fn error_prefix_colorized_only_for_default_stderr() {
        let stderr_logger = Logger::with_defaults();
        if cfg!(windows) {
            assert_eq!(stderr_logger.error.prefix(), "ERROR: ");
        } else {
            assert_eq!(stderr_logger.error.prefix(), "\x1b[1;31mERROR: \x1b[0m");
        }

        let (buffer_logger, _sink) = buffered(vec![]);
        assert_eq!(buffer_logger.error.prefix(), "ERROR: ");
    }

    #[test]
    fn with_defaults_enables_everything() {
        let logger = Logger::with_defaults();
        assert!(!logger.debug.is_muted());
        assert!(!logger.info.is_muted());
        assert!(!logger.error.is_muted());
        assert!(!logger.banner.is_muted());
    }

    #[test]
    fn format_macros_reach_their_channels() {
        let (logger, sink) = buffered(vec![]);
        log_debug!(logger, "d{}", 1);
        log_info!(logger, "i{}", 2);
        log_error!(logger, "e{}", 3);

        let output = sink.as_string();
        assert!(output.contains("d1"));
        assert!(output.contains("i2"));
        assert!(output.contains("e3"));
    }
}
