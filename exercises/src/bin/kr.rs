//! CLI entrypoint: runs one exercise over stdin, writing to stdout.

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use exercises::Exercise;
use scanner_framework::{DefaultContext, ReaderContext};
use tracing_subscriber::EnvFilter;

/// Stream exercises from chapters 1 and 2 of "The C Programming Language".
#[derive(Debug, Parser)]
#[command(name = "kr")]
#[command(about = "Character-stream filters, counters and histograms")]
struct Cli {
    #[command(subcommand)]
    exercise: Exercise,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(exercise: &Exercise) -> exercises::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if exercise.reads_input() {
        let stdin = io::stdin();
        exercise.run(ReaderContext::new(stdin.lock()), &mut out)?;
    } else {
        exercise.run(DefaultContext::new(b""), &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli.exercise) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("kr: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
