use anyhow::Result;
use std::{collections::VecDeque, fmt::Debug};

/// The line-oriented input/output methods needed by a `Session`.
pub trait Console: Debug {
    /// Block until a full line is available. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Report a problem with the user's input. The session keeps going.
    fn write_error(&mut self, line: &str) -> Result<()>;
}

/// A canned console: reads from a fixed list of lines, records everything
/// written to it.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: vec![],
        }
    }

    /// Everything written so far. Errors are prefixed with `error: `.
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> Result<()> {
        self.output.push(format!("error: {line}"));
        Ok(())
    }
}
