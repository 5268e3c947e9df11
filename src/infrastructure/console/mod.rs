//! Line-oriented terminal access.
//!
//! Both traits are implemented for every `BufRead` / `Write`, so the real
//! terminal and in-memory buffers are interchangeable.

use std::io::{self, BufRead, Write};

/// Source of single input lines
pub trait LineReader {
    /// Next line without its terminator, `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for output lines and prompts
pub trait LineWriter {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Write `text` without a newline and flush, for prompts
    fn write_prompt(&mut self, text: &str) -> io::Result<()>;
}

impl<R: BufRead> LineReader for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<W: Write> LineWriter for W {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{}", line)
    }

    fn write_prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self, "{}", text)?;
        self.flush()
    }
}
