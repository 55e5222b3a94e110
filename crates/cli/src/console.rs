//! Line-based console abstraction.
//!
//! The controller only ever says *what* a line means ([`Level`]); how that
//! looks on screen is decided here.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use colored::Colorize;

/// Semantic tag of an output line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Text console the menu talks to.
pub trait Console {
    /// Write one line tagged with its semantic level.
    fn write_line(&mut self, text: &str, level: Level) -> io::Result<()>;

    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout(), color)
    }
}

impl<R, W> Terminal<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&self, text: &str, level: Level) -> String {
        if !self.color {
            return text.to_string();
        }
        match level {
            Level::Info => text.to_string(),
            Level::Success => text.green().to_string(),
            Level::Warning => text.yellow().to_string(),
            Level::Error => text.red().to_string(),
        }
    }
}

impl<R, W> Console for Terminal<R, W>
where
    R: BufRead,
    W: Write,
{
    fn write_line(&mut self, text: &str, level: Level) -> io::Result<()> {
        let line = self.render(text, level);
        writeln!(self.output, "{line}")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        // Prompts are written without waiting for a newline-triggered flush.
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_terminators() {
        let mut term = Terminal::new(Cursor::new("first\r\nsecond\n"), Vec::new(), false);
        assert_eq!(term.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(term.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(term.read_line().unwrap(), None);
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new(), false);
        term.write_line("Product sold successfully.", Level::Success).unwrap();
        term.write_line("Product not found.", Level::Error).unwrap();

        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out, "Product sold successfully.\nProduct not found.\n");
    }

    #[test]
    fn colored_output_wraps_non_info_levels() {
        colored::control::set_override(true);
        let mut term = Terminal::new(Cursor::new(""), Vec::new(), true);
        term.write_line("ok", Level::Success).unwrap();
        term.write_line("menu", Level::Info).unwrap();

        let out = String::from_utf8(term.into_output()).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().contains("\u{1b}["));
        assert_eq!(lines.next().unwrap(), "menu");
    }
}
