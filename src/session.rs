//! A small command interpreter for poking at a `Stack` and the bubble sort.

use crate::console::Console;
use crate::debug::DisplayList;
use crate::sort::{bubble_sort_with, Termination};
use crate::stack::Stack;
use anyhow::{bail, Context, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub termination: Termination,
    /// Print the sequence after every sort pass.
    pub trace: bool,
    /// Seed for `shuffle`. Picked at random if absent.
    pub seed: Option<u64>,
}

pub const HELP: &str = "\
commands:
  push <int>...   push values onto the stack
  pop             pop the top value
  peek            show the top value
  reset           empty the stack
  print           show the stack, oldest first
  sort <int>...   bubble sort the given values
  shuffle <n>     bubble sort a random permutation of 1..=n
  help            show this message
  quit            leave";

#[derive(Debug)]
pub struct Session<'a> {
    stack: Stack,
    options: Options,
    rng: StdRng,
    console: &'a mut dyn Console,
}

/// Whether to keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl<'a> Session<'a> {
    pub const MAX_SHUFFLE: usize = 1000;

    pub fn new(options: Options, console: &'a mut dyn Console) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            stack: Stack::new(),
            options,
            rng,
            console,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Read and run commands until `quit` or end of input.
    ///
    /// Mistakes in a command are reported to the console; only I/O errors end
    /// the session early.
    pub fn run(mut self) -> Result<()> {
        while let Some(line) = self.console.read_line()? {
            match self.execute(&line) {
                Ok(Flow::Continue) => (),
                Ok(Flow::Quit) => break,
                Err(e) => self.console.write_error(&format!("{e:#}"))?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let args: Vec<&str> = words.collect();

        match command.to_ascii_lowercase().as_str() {
            "push" => self.push(&parse_ints(&args)?)?,
            "pop" => {
                no_args(&args)?;
                if self.stack.is_empty() {
                    bail!("stack is empty");
                }
                let value = self.stack.pop();
                self.console.write_line(&value.to_string())?;
            }
            "peek" => {
                no_args(&args)?;
                let Some(value) = self.stack.peek() else {
                    bail!("stack is empty");
                };
                self.console.write_line(&value.to_string())?;
            }
            "reset" => {
                no_args(&args)?;
                self.stack.reset();
            }
            "print" => {
                no_args(&args)?;
                self.console.write_line(&self.stack.to_string())?;
            }
            "sort" => {
                let mut values = parse_ints(&args)?;
                self.sort(&mut values)?;
            }
            "shuffle" => {
                let [n] = args.as_slice() else {
                    bail!("usage: shuffle <n>");
                };
                let n: usize = n.parse().with_context(|| format!("not a count: {n:?}"))?;
                if n > Self::MAX_SHUFFLE {
                    bail!("at most {} values can be shuffled", Self::MAX_SHUFFLE);
                }

                let mut values: Vec<i32> = (1..=n as i32).collect();
                values.shuffle(&mut self.rng);
                self.console
                    .write_line(&format!("input {}", DisplayList(&values)))?;
                self.sort(&mut values)?;
            }
            "help" => self.console.write_line(HELP)?,
            "quit" | "exit" => return Ok(Flow::Quit),
            _ => bail!("unknown command {command:?} (try `help`)"),
        }

        Ok(Flow::Continue)
    }

    fn push(&mut self, values: &[i32]) -> Result<()> {
        if values.is_empty() {
            bail!("usage: push <int>...");
        }
        for &value in values {
            if !self.stack.push(value) {
                bail!("stack full (capacity {})", self.stack.capacity());
            }
        }
        Ok(())
    }

    fn sort(&mut self, values: &mut [i32]) -> Result<()> {
        let mut trace = vec![];
        let report = bubble_sort_with(values, self.options.termination, |pass, items| {
            if self.options.trace {
                trace.push(format!("pass {pass}: {}", DisplayList(items)));
            }
        });

        for line in &trace {
            self.console.write_line(line)?;
        }
        self.console
            .write_line(&format!("sorted {}", DisplayList(values)))?;
        if let Some(pass) = report.early_exit {
            self.console
                .write_line(&format!("early termination on pass {pass}"))?;
        }
        Ok(())
    }
}

fn parse_ints(args: &[&str]) -> Result<Vec<i32>> {
    args.iter()
        .map(|s| s.parse::<i32>().with_context(|| format!("not an integer: {s:?}")))
        .collect()
}

fn no_args(args: &[&str]) -> Result<()> {
    if let Some(extra) = args.first() {
        bail!("unexpected argument {extra:?}");
    }
    Ok(())
}
