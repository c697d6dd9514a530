use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};

/// Source of menu selections.
pub trait Prompt {
    /// Reads one answer. `None` means input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Themed line input for an interactive terminal.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(Some(answer.trim().to_string())),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("Failed to read selection"),
        }
    }
}

/// Plain line reader, used for piped stdin and scripted sessions.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for LinePrompt<R> {
    fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read selection")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Pairs a prompt with the writer that receives everything the session prints.
pub struct Conversation<P, W> {
    prompt: P,
    out: W,
    echo_prompt: bool,
}

impl<P: Prompt, W: Write> Conversation<P, W> {
    /// `echo_prompt` writes the prompt text to `out` before asking; themed
    /// prompts render their own.
    pub fn new(prompt: P, out: W, echo_prompt: bool) -> Self {
        Self {
            prompt,
            out,
            echo_prompt,
        }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.out, "{}", line).context("Failed to write output")
    }

    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.echo_prompt {
            write!(self.out, "{}: ", prompt).context("Failed to write output")?;
            self.out.flush().context("Failed to write output")?;
        }
        self.prompt.ask(prompt)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
