//! A single derived output channel and its line format

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::panic::Location;
use std::path::Path;

use bitflags::bitflags;
use chrono::Local;

use crate::sink::SharedSink;

bitflags! {
    /// Per-line metadata a channel prepends to every message.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineFlags: u8 {
        /// Calendar date, `YYYY/MM/DD`.
        const DATE = 1 << 0;
        /// Wall-clock time, `HH:MM:SS`.
        const TIME = 1 << 1;
        /// Short source file name and line of the call site.
        const SOURCE = 1 << 2;
    }
}

/// One named output channel.
///
/// Channels are derived once at construction and never reconfigured. A
/// muted channel holds no sink and drops every write.
pub struct Channel {
    sink: Option<SharedSink>,
    prefix: Cow<'static, str>,
    flags: LineFlags,
}

impl Channel {
    pub(crate) fn bound(
        sink: SharedSink,
        prefix: impl Into<Cow<'static, str>>,
        flags: LineFlags,
    ) -> Self {
        Self {
            sink: Some(sink),
            prefix: prefix.into(),
            flags,
        }
    }

    /// A channel whose writes vanish.
    pub(crate) fn muted() -> Self {
        Self {
            sink: None,
            prefix: Cow::Borrowed(""),
            flags: LineFlags::empty(),
        }
    }

    /// Whether writes to this channel are discarded.
    pub fn is_muted(&self) -> bool {
        self.sink.is_none()
    }

    /// Write one literal line. The trailing newline is added here.
    #[track_caller]
    pub fn println(&self, message: &str) {
        self.emit(Location::caller(), message);
    }

    /// Write one formatted line, typically via `format_args!` or the
    /// `log_*!` macros.
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.emit(Location::caller(), &args.to_string());
    }

    fn emit(&self, location: &Location<'_>, message: &str) {
        let Some(sink) = &self.sink else { return };
        let line = self.format_line(location, message);
        // Sink failures are dropped; logging never surfaces errors after
        // construction.
        let mut sink = sink.lock();
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }

    fn format_line(&self, location: &Location<'_>, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 32);
        line.push_str(&self.prefix);
        if self.flags.intersects(LineFlags::DATE | LineFlags::TIME) {
            let now = Local::now();
            if self.flags.contains(LineFlags::DATE) {
                let _ = write!(line, "{} ", now.format("%Y/%m/%d"));
            }
            if self.flags.contains(LineFlags::TIME) {
                let _ = write!(line, "{} ", now.format("%H:%M:%S"));
            }
        }
        if self.flags.contains(LineFlags::SOURCE) {
            let _ = write!(line, "{}:{}: ", short_file(location.file()), location.line());
        }
        line.push_str(message);
        line.push('\n');
        line
    }

    #[cfg(test)]
    pub(crate) fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("muted", &self.is_muted())
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish()
    }
}

/// Base name of a source path, matching how call sites are usually read.
fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
