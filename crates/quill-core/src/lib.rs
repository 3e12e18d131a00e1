//! Quill Core
//!
//! Channel-based logging with construction-time configuration.
//! A [`Logger`] bundles four independent output channels (debug, info,
//! error, banner) derived once from a sequence of [`LogOption`] values.
//! Output goes to standard error by default, or to an append-mode file or
//! an in-memory [`MemorySink`].
//!
//! ```rust
//! use quill_core::{LogOption, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new([LogOption::Buffer(sink.clone())]).unwrap();
//!
//! logger.info.println("ready");
//! assert!(sink.as_string().contains("ready"));
//! ```
//!
//! The debug and info channels can be disabled at construction or muted
//! afterwards; the error and banner channels always emit.

pub mod channel;
pub mod error;
pub mod logger;
pub mod options;
pub mod sink;

// Re-export commonly used types
pub use channel::{Channel, LineFlags};
pub use error::{ConfigError, ConfigResult};
pub use logger::Logger;
pub use options::LogOption;
pub use sink::MemorySink;
