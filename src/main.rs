mod cli;
mod commands;
mod error;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Invocation};
use commands::interactive::{self, OutputMode};
use commands::split;
use error::{ErrorKind, SplitError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("splitpdf={}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("PDF SPLITTER - Extract pages from PDF files");
    println!("{}", "=".repeat(60));
    println!();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if !cli.no_banner {
        print_banner();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.invocation() {
        Invocation::Single {
            input,
            ranges,
            output,
        } => {
            split::run(&input, &ranges, &output)?;
        }
        Invocation::Multi {
            input,
            ranges,
            prefix,
        } => {
            split::run_multi(&input, &ranges, prefix.as_deref())?;
        }
        Invocation::Interactive { input, ranges } => {
            let mut stdout = std::io::stdout();
            interactive::print_usage(&mut stdout)?;
            let request =
                interactive::prompt(&mut std::io::stdin().lock(), &mut stdout, input, ranges)?;
            println!();

            match request.mode {
                OutputMode::Single { output } => {
                    split::run(&request.input, &request.ranges, &output)?;
                }
                OutputMode::Multi { prefix } => {
                    split::run_multi(&request.input, &request.ranges, Some(&prefix))?;
                }
            }
        }
    }

    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<SplitError>() {
        Some(split_err) if split_err.kind() == ErrorKind::Unexpected => {
            eprintln!("Unexpected error: {}", split_err);
        }
        Some(split_err) => eprintln!("Error: {}", split_err),
        None => eprintln!("Error: {:#}", err),
    }
}
