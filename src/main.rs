use anyhow::{Context, Result};
use clap::Parser;
use stack_sort::{Options, Session, TerminalConsole, Termination};
use std::{fs::File, io::BufReader, path::PathBuf};

/// Play with a bounded stack and an early-exit bubble sort.
///
/// Reads one command per line (`help` lists them) from SCRIPT, or from stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Command file to run instead of reading stdin.
    script: Option<PathBuf>,

    /// End a sort after a pass with exactly one swap, instead of zero.
    #[arg(long)]
    legacy_early_exit: bool,

    /// Print the sequence after every sort pass.
    #[arg(long)]
    trace: bool,

    /// Seed for `shuffle`.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            termination: if self.legacy_early_exit {
                Termination::SingleSwap
            } else {
                Termination::NoSwaps
            },
            trace: self.trace,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut console = match &cli.script {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            eprintln!("stack-sort: running {}", path.display());
            TerminalConsole::from_reader(BufReader::new(file))
        }
        None => TerminalConsole::stdin(),
    };

    if cli.legacy_early_exit {
        eprintln!("stack-sort: sorts stop after a pass with exactly one swap");
    }

    Session::new(cli.options(), &mut console).run()?;

    eprintln!("stack-sort: done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["stack-sort"]);
        assert!(cli.script.is_none());
        let options = cli.options();
        assert_eq!(options.termination, Termination::NoSwaps);
        assert!(!options.trace);
        assert_eq!(options.seed, None);
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from([
            "stack-sort",
            "--legacy-early-exit",
            "--trace",
            "--seed",
            "42",
            "cmds.txt",
        ]);
        assert_eq!(cli.script, Some(PathBuf::from("cmds.txt")));
        let options = cli.options();
        assert_eq!(options.termination, Termination::SingleSwap);
        assert!(options.trace);
        assert_eq!(options.seed, Some(42));
    }
}
