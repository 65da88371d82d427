//! Line-oriented input for the menu
//!
//! End of input is reported as `None` at every level so the caller can abandon
//! whatever it was collecting.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::util::Palette;

/// Text that does not parse as a finite number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInput(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a number", self.0)
    }
}

impl std::error::Error for InvalidInput {}

/// Parse a numeric answer such as `15`, `0.8`, or `-300`
pub fn parse_number(text: &str) -> Result<f64, InvalidInput> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInput(trimmed.to_string())),
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Show `prompt` and read one trimmed line; `None` at end of input
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a number, asking again until the entry parses
    pub fn read_number(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_number(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    tracing::debug!(%err, "Rejected numeric entry");
                    let message = self
                        .palette
                        .negative("Invalid input. Please enter a number (e.g., 15 or 0.8)");
                    writeln!(self.output, "\n{message}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new(), Palette::plain())
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 17 "), Ok(17.0));
        assert_eq!(parse_number("0.8"), Ok(0.8));
        assert_eq!(parse_number("-300"), Ok(-300.0));
        assert_eq!(parse_number("abc"), Err(InvalidInput("abc".to_string())));
        assert!(parse_number("").is_err());
        assert!(parse_number("nan").is_err());
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn test_read_number_reprompts() {
        let mut prompter = prompter("abc\n\n17\n");
        assert_eq!(prompter.read_number("> ").unwrap(), Some(17.0));

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output.matches("> ").count(), 3);
        assert_eq!(output.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_end_of_input_abandons() {
        let mut prompter = prompter("abc\n");
        assert_eq!(prompter.read_number("> ").unwrap(), None);
        assert_eq!(prompter.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_read_line_trims() {
        let mut prompter = prompter("  q \r\n");
        assert_eq!(prompter.read_line("> ").unwrap().as_deref(), Some("q"));
    }
}
