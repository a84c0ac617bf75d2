//! Diagnostic Console.
//!
//! Destination for the text produced by the diagnostic interrupts. Output goes to the host's
//! stdout or stderr, or into an in-memory buffer so tests and embedders can inspect it.
//! A failed write to the host stream is logged and otherwise ignored; diagnostics never
//! stop the machine.

use std::io::{self, Write};

use tracing::warn;

/// Where interrupt output is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Console {
    /// Host standard output.
    #[default]
    Stdout,
    /// Host standard error.
    Stderr,
    /// In-memory buffer.
    Capture(Vec<u8>),
}

impl Console {
    /// Creates a console that records output in memory.
    pub const fn capture() -> Self {
        Self::Capture(Vec::new())
    }

    /// Writes text to the console.
    pub fn write_str(&mut self, text: &str) {
        let res = match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes()).and_then(|()| out.flush())
            }
            Self::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(text.as_bytes()).and_then(|()| out.flush())
            }
            Self::Capture(buf) => {
                buf.extend_from_slice(text.as_bytes());
                Ok(())
            }
        };
        if let Err(e) = res {
            warn!("console write failed: {e}");
        }
    }

    /// Text captured so far; empty for host streams.
    pub fn captured(&self) -> String {
        match self {
            Self::Capture(buf) => String::from_utf8_lossy(buf).into_owned(),
            Self::Stdout | Self::Stderr => String::new(),
        }
    }

    /// Returns the captured text and clears the buffer.
    pub fn take_captured(&mut self) -> String {
        match self {
            Self::Capture(buf) => String::from_utf8_lossy(&std::mem::take(buf)).into_owned(),
            Self::Stdout | Self::Stderr => String::new(),
        }
    }
}
