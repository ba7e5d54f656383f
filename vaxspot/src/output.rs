//! Report output sink
//!
//! The report goes to the console as it is written and is also kept in
//! memory so it can be handed to a notifier once the run is done.

use std::io::{self, Write};

/// Writes everything to `primary`, flushing after each write, and copies the
/// same bytes into `secondary`.
#[derive(Debug)]
pub struct TeeWriter<A: Write, B: Write> {
    primary: A,
    secondary: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }

    pub fn into_parts(self) -> (A, B) {
        (self.primary, self.secondary)
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.primary.write(buf)?;
        self.primary.flush()?;
        self.secondary.write_all(&buf[..n])?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.secondary.flush()
    }
}

/// Console output with an in-memory copy
pub type CapturedStdout = TeeWriter<io::Stdout, Vec<u8>>;

pub fn captured_stdout() -> CapturedStdout {
    TeeWriter::new(io::stdout(), Vec::new())
}

impl<A: Write> TeeWriter<A, Vec<u8>> {
    /// Everything written so far, lossily decoded.
    pub fn captured_text(&self) -> String {
        String::from_utf8_lossy(&self.secondary).into_owned()
    }
}
