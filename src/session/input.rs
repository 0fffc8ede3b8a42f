use std::io::{BufRead, Write};
use crate::error::Result;

/// Source of operator answers, one line at a time.
pub trait LineSource {
    /// Show `prompt` and read one line without its line ending.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Show a line of text to the operator.
    fn show(&mut self, text: &str) -> Result<()>;
}

/// Line source over any reader/writer pair: stdin/stdout for a real session,
/// in-memory buffers in tests.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LineSource for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Invalid UTF-8 is replaced, never rejected.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn show(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_and_echoes_prompts() {
        let mut term = Terminal::new("first\r\nsecond\nlast".as_bytes(), Vec::new());
        assert_eq!(term.read_line("a: ").unwrap().as_deref(), Some("first"));
        assert_eq!(term.read_line("b: ").unwrap().as_deref(), Some("second"));
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("last"));
        assert_eq!(term.read_line("c: ").unwrap(), None);
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "a: b: c: ");
    }

    #[test]
    fn show_writes_a_full_line() {
        let mut term = Terminal::new("".as_bytes(), Vec::new());
        term.show("hello").unwrap();
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "hello\n");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut term = Terminal::new(&b"caf\xe9\r\nok\n"[..], Vec::new());
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("caf\u{fffd}"));
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("ok"));
        assert_eq!(term.read_line("").unwrap(), None);
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        let mut term = Terminal::new("  spaced  \n\n".as_bytes(), Vec::new());
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("  spaced  "));
        assert_eq!(term.read_line("").unwrap().as_deref(), Some(""));
        assert_eq!(term.read_line("").unwrap(), None);
    }
}
