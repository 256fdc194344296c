// ABOUTME: Entry point for the ssh-hkaudit CLI application.
// ABOUTME: Parses arguments, runs one audit and reports the verdict as the exit code.

mod cli;

use clap::Parser;
use clap::error::ErrorKind;
use cli::Cli;
use ssh_hkaudit::{audit, exit, sandbox};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage(e),
    };

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    if let Err(e) = sandbox::restrict() {
        eprintln!("Error: {e}");
        return ExitCode::from(e.exit_code());
    }

    match audit(&cli.audit_config()).await {
        Ok(verdict) => {
            if let Some(message) = verdict.message() {
                println!("{message}");
            }
            ExitCode::from(verdict.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Help, bad flags and missing arguments all exit with `EX_USAGE`.
fn usage(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayVersion => {
            print!("{err}");
            ExitCode::from(exit::OKAY)
        }
        _ => {
            eprint!("{err}");
            ExitCode::from(exit::USAGE)
        }
    }
}
