//! Human-readable status lines.

use std::fmt;
use std::io::{self, Write};

/// Tag prefixed to every status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Check passed.
    Ok,
    /// Configuration present but weaker than expected.
    Warn,
    /// Expected negative-compliance signal.
    Fail,
    /// Unexpected failure; the run aborts after this line.
    Error,
}

impl Status {
    /// The bracketed tag, e.g. `[OK]`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Fail => "[FAIL]",
            Self::Error => "[ERROR]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Writes tagged status lines to an output sink.
///
/// The binary writes to standard output; tests write to a `Vec<u8>`.
#[derive(Debug)]
pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    /// Create a report writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one `<tag> <message>` line.
    pub fn line(&mut self, status: Status, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "{status} {message}")?;
        self.out.flush()
    }

    /// Write an `[OK]` line.
    pub fn ok(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.line(Status::Ok, message)
    }

    /// Write a `[WARN]` line.
    pub fn warn(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.line(Status::Warn, message)
    }

    /// Write a `[FAIL]` line.
    pub fn fail(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.line(Status::Fail, message)
    }

    /// Write an `[ERROR]` line.
    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.line(Status::Error, message)
    }

    /// Consume the report and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
