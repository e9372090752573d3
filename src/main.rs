use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quiz_battle::QuestionBank;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that every question in a JSON file is valid
    Validate {
        /// JSON file to load the questions from
        file: PathBuf,
    },
    /// Print the questions of a JSON file
    Show {
        /// JSON file to load the questions from
        file: PathBuf,
        /// Only print this question (1-based)
        #[arg(short, long)]
        index: Option<usize>,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(args.command, &mut stdout) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Validate { file } => {
            let bank = QuestionBank::from_json(&file)
                .with_context(|| format!("{} is not a valid question bank", file.display()))?;
            info!(count = bank.len(), "validation passed");
            writeln!(out, "{}: {} question(s) OK", file.display(), bank.len())?;
        }
        Command::Show { file, index } => {
            let bank = QuestionBank::from_json(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            bank.render(out, index)?;
        }
    }
    Ok(())
}
