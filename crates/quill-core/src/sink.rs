//! Output sinks shared by the derived channels

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Shared handle to the write end of a channel's output.
///
/// All four channels of one logger hold clones of the same handle, so
/// concurrent writes serialize per line. The sink is never closed by this
/// crate; a file lives as long as the last handle.
pub(crate) type SharedSink = Arc<Mutex<dyn Write + Send>>;

/// An in-memory growable byte sink.
///
/// Cloning yields another handle to the same buffer, so a caller can hand
/// one clone to the logger and keep reading captured output through the
/// other.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Captured output as a string, lossy on invalid UTF-8.
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("len", &self.buffer.lock().len())
            .finish()
    }
}
