//! Line-based prompts over any reader and writer.

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Input side of the terminal game.
///
/// Everything the driving loop needs from the person at the keyboard goes
/// through this trait, so scripted input can stand in for stdin.
pub trait Prompter {
    /// Shows numbered `options` and returns the chosen index, or `None` if the
    /// user cancelled (`0`, `q`, or end of input).
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<Option<usize>>;

    /// Reads one trimmed line; `None` at end of input.
    fn line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Asks a yes/no question. End of input counts as no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Prints an informational message.
    fn notice(&mut self, message: &str) -> Result<()>;

    /// Prints an error message.
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Writer shared with the renderer.
    fn output(&mut self) -> &mut dyn Write;
}

/// [`Prompter`] backed by a buffered reader and a writer.
///
/// The binary uses stdin/stdout; tests use in-memory buffers.
#[derive(Debug)]
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Creates a prompter; `color` enables ANSI styling of messages.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Consumes the prompter and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().context("Failed to flush output")?;
        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    #[instrument(skip(self, options), fields(options = options.len()))]
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<Option<usize>> {
        loop {
            writeln!(self.output)?;
            for (idx, option) in options.iter().enumerate() {
                writeln!(self.output, "[{}] {}", idx + 1, option)?;
            }
            writeln!(self.output, "[0] Quit")?;
            write!(self.output, "{} [1-{}, 0]: ", prompt, options.len())?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer == "0" || answer.eq_ignore_ascii_case("q") {
                debug!("Selection cancelled");
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(num) if (1..=options.len()).contains(&num) => {
                    debug!(choice = num - 1, "Option selected");
                    return Ok(Some(num - 1));
                }
                _ => self.warn(&format!("'{}' is not one of the options.", answer))?,
            }
        }
    }

    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        write!(self.output, "> ")?;
        self.read_line()
    }

    #[instrument(skip(self))]
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.output, "{} [y/n]: ", prompt)?;
            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.warn("Please answer y or n.")?,
            }
        }
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.blue())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.red())?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn output(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
