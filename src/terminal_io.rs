use crate::console::Console;
use anyhow::Result;
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    ExecutableCommand,
};
use std::{
    fmt,
    io::{self, BufRead, IsTerminal, Write},
};

/// A `crossterm`-based implementation of `Console`.
///
/// Reads commands from any line source (stdin, or a script file). Results go
/// to stdout and errors to stderr, so piped output only carries results. A
/// prompt is only shown when reading from an interactive stdin.
pub struct TerminalConsole {
    input: Box<dyn BufRead>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    prompt: bool,
}

impl TerminalConsole {
    const PROMPT: &'static str = "> ";

    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        Self {
            input: Box::new(stdin.lock()),
            out: Box::new(io::stdout()),
            err: Box::new(io::stderr()),
            prompt,
        }
    }

    pub fn from_reader(input: impl BufRead + 'static) -> Self {
        Self::with_output(input, io::stdout(), io::stderr())
    }

    pub fn with_output(
        input: impl BufRead + 'static,
        out: impl Write + 'static,
        err: impl Write + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            out: Box::new(out),
            err: Box::new(err),
            prompt: false,
        }
    }
}

impl fmt::Debug for TerminalConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalConsole")
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        if self.prompt {
            self.out
                .execute(SetForegroundColor(Color::DarkGrey))?
                .execute(Print(Self::PROMPT))?
                .execute(ResetColor)?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        // Strip the line terminator (either style).
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        self.out.flush()?;
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        self.err
            .execute(SetForegroundColor(Color::Red))?
            .execute(Print(format!("error: {line}\n")))?
            .execute(ResetColor)?;
        Ok(())
    }
}
