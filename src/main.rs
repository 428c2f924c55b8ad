//! Wordlist Check - validate and normalize a wordlist on stdin
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::io;
use std::process::ExitCode;

use wordlist_check::cli::Args;
use wordlist_check::error::CheckError;
use wordlist_check::processor::LineProcessor;

fn main() -> ExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; RUST_LOG takes precedence over --verbose
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    LineProcessor::new().run(stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Print a failure to stderr
///
/// A rejected word prints only its diagnostic line; anything else prints the
/// error followed by its chain of causes.
fn report(e: &anyhow::Error) {
    if let Some(CheckError::Rejected(diagnostic)) = e.downcast_ref::<CheckError>() {
        eprintln!("{}", diagnostic);
        return;
    }

    eprintln!("error: {}", e);

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("  caused by: {}", err);
        source = err.source();
    }
}
