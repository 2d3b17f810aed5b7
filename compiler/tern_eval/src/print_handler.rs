//! Output destinations for `print` and `println`.
//!
//! Scripts never touch stdout directly; the natives write through a
//! [`SharedPrintHandler`] captured at bootstrap. Hosts pick the destination:
//! - `Stdout`: the process's standard output (default)
//! - `Buffer`: captured in memory, for tests and embedders
//! - `Silent`: discarded

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes straight to the process's standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    fn emit(self, text: &str, newline: bool) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let result = if newline {
            writeln!(out, "{text}")
        } else {
            // `print` output must show up before the next read from the host.
            out.write_all(text.as_bytes()).and_then(|()| out.flush())
        };
        if let Err(error) = result {
            tracing::warn!(%error, "failed to write script output");
        }
    }
}

/// Accumulates everything written to it.
#[derive(Debug, Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&self, text: &str, newline: bool) {
        let mut buf = self.buffer.lock();
        buf.push_str(text);
        if newline {
            buf.push('\n');
        }
    }

    /// Copy of everything captured so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drain the buffer, returning what it held.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Destination for script output, dispatched by variant.
#[derive(Debug)]
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        self.emit(msg, true);
    }

    /// Write `msg` as is.
    pub fn print(&self, msg: &str) {
        self.emit(msg, false);
    }

    fn emit(&self, msg: &str, newline: bool) {
        match self {
            Self::Stdout(h) => h.emit(msg, newline),
            Self::Buffer(h) => h.emit(msg, newline),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured output, leaving the buffer empty.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }

    /// Returns `true` if output written here can be read back.
    pub fn captures(&self) -> bool {
        matches!(self, Self::Buffer(_))
    }
}

/// Handle shared between the host and every native that prints.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Handler that writes to stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Handler that captures output in memory.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
