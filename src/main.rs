use std::{io, path::PathBuf, process::ExitCode};

use clap::Parser;
use lemo::{
    InterpreterOptions, interpreter::evaluator::stack::DEFAULT_STACK_CAPACITY, read_source, run,
};
use tracing_subscriber::{EnvFilter, fmt};

/// lemo is a tiny stack language: push integers, add, duplicate, shift and
/// dump them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the `.lemo` program to run.
    source: PathBuf,

    /// Maximum number of values the evaluation stack may hold.
    #[arg(long, default_value_t = DEFAULT_STACK_CAPACITY)]
    stack_capacity: usize,

    /// Characters that separate words in the source.
    #[arg(long, default_value = " \n")]
    delimiters: String,
}

fn init_logging() {
    // RUST_LOG controls verbosity; warnings only by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let options = InterpreterOptions { stack_capacity: args.stack_capacity,
                                       delimiters:     args.delimiters.chars().collect(), };

    let result = read_source(&args.source).and_then(|script| {
                                               run(&script, &options, &mut io::stdout().lock())
                                           });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
