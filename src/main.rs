use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueHint};

use gapfill::commands::{blank, practice};

#[derive(Parser, Debug)]
#[command(
    name = "gapfill",
    version,
    about = "Gap-fill dictation exercises for the terminal.",
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build an exercise interactively, retrying levels until it looks right
    Practice {
        /// Path to a text file holding the passage. Prompts for one if omitted.
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
    /// Blank a passage once and print the result
    Blank {
        /// Path to a text file holding the passage
        #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
        path: PathBuf,
        /// Difficulty level 1-10: roughly the percentage of words hidden
        #[arg(long, value_name = "LEVEL")]
        level: u8,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Practice { path } => practice::run(path)?,
        Command::Blank { path, level, json } => blank::run(&path, level, json)?,
    }

    Ok(())
}
