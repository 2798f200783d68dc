//! Output: The write surface the renderer draws through.
//!
//! [`OutputBuffer`] accumulates a whole frame of text and cursor codes so it
//! can be flushed in a single `write()` syscall; [`TerminalOutput`] pairs one
//! with a real writer and implements [`OutputSink`].

use std::io::{self, Write};

/// Line terminator. Raw mode turns off output post-processing, so a bare
/// `\n` would not return the cursor to column 0.
pub const LINE_BREAK: &str = "\r\n";

/// The only operations the renderer needs from a terminal.
pub trait OutputSink {
    /// Write one row of text followed by a line break.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Move the cursor relative to where it is now.
    ///
    /// Negative `rows` moves up, negative `cols` moves left.
    fn move_cursor(&mut self, rows: i32, cols: i32) -> io::Result<()>;

    /// Push everything written so far to the device.
    fn flush(&mut self) -> io::Result<()>;
}

/// Pre-allocated buffer for building text and ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor relative to its current position.
    ///
    /// Emits `CSI n A/B` for rows and `CSI n D/C` for columns; a zero delta
    /// emits nothing for that axis.
    pub fn cursor_move_relative(&mut self, rows: i32, cols: i32) {
        if rows < 0 {
            let _ = write!(self.data, "\x1b[{}A", rows.unsigned_abs());
        } else if rows > 0 {
            let _ = write!(self.data, "\x1b[{rows}B");
        }
        if cols < 0 {
            let _ = write!(self.data, "\x1b[{}D", cols.unsigned_abs());
        } else if cols > 0 {
            let _ = write!(self.data, "\x1b[{cols}C");
        }
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_str(line);
        self.write_str(LINE_BREAK);
        Ok(())
    }

    fn move_cursor(&mut self, rows: i32, cols: i32) -> io::Result<()> {
        self.cursor_move_relative(rows, cols);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An [`OutputSink`] that batches a frame and writes it to `W` on flush.
#[derive(Debug)]
pub struct TerminalOutput<W: Write> {
    buffer: OutputBuffer,
    writer: W,
}

impl<W: Write> TerminalOutput<W> {
    /// Wrap a writer (usually stdout).
    pub fn new(writer: W) -> Self {
        Self {
            buffer: OutputBuffer::new(),
            writer,
        }
    }

    /// Get a reference to the underlying writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> OutputSink for TerminalOutput<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.buffer.write_line(line)
    }

    fn move_cursor(&mut self, rows: i32, cols: i32) -> io::Result<()> {
        self.buffer.move_cursor(rows, cols)
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let result = self.buffer.flush_to(&mut self.writer);
        self.buffer.clear();
        result
    }
}
