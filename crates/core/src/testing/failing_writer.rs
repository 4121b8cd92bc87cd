//! Output sink that rejects every write.

use std::io::{self, Write};

/// A writer whose every operation fails with `BrokenPipe`.
///
/// Stands in for a closed stdout when testing error propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }
}
