//! Line-oriented prompt over any reader/writer pair

use crate::error::Result;
use std::io::{BufRead, Write};

/// Reads answers from `input` and writes menus and messages to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Show `label` and read one line without its line ending
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        if !label.is_empty() {
            write!(self.output, "{}: ", label)?;
        }
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print preformatted text that already ends with a newline
    pub fn print_block(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        if !text.ends_with('\n') {
            writeln!(self.output)?;
        }
        Ok(())
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "✓ {}", text)?;
        Ok(())
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "Error: {}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
