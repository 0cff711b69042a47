//! Whitehouse CLI entry point.
//!
//! Without `--script` this starts the interactive REPL. With `--script`
//! it runs one command per line and prints the transcript.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use whitehouse_engine::{Interpreter, InterpreterConfig};
use whitehouse_foundation::{Error, Result};
use whitehouse_runtime::{Repl, RustylineEditor, Session};

#[derive(Parser)]
#[command(name = "whitehouse")]
#[command(about = "Explore a small white house and the forest around it")]
#[command(version)]
struct Cli {
    /// Run commands from a file, one per line, then exit
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Start from a saved game
    #[arg(short, long, value_name = "FILE")]
    restore: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,

    /// Don't describe each new location after moving
    #[arg(long)]
    no_auto_look: bool,

    /// Print a summary of the final game state
    #[arg(long)]
    dump_state: bool,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = InterpreterConfig::default().with_auto_look(!cli.no_auto_look);
    let mut session = Session::with_interpreter(Interpreter::new()?.with_config(config));

    if let Some(path) = &cli.restore {
        session.restore(path)?;
    }

    if let Some(path) = &cli.script {
        let script = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("failed to read script '{}': {e}", path.display()))
        })?;
        for line in session.run_script(&script) {
            println!("{line}");
        }
    } else {
        let mut repl = Repl::with_editor(RustylineEditor::new()?, session);
        if cli.no_banner {
            repl = repl.without_banner();
        }
        repl.run()?;
        session = repl.session().clone();
    }

    if cli.dump_state {
        for line in session.summary() {
            println!("{line}");
        }
    }

    Ok(())
}
