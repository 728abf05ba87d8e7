//! # nanmask CLI entry point
//!
//! Parses command-line arguments, resolves the reference date, and
//! dispatches to subcommand handlers.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nanmask_cli::apply::{run_apply, ApplyArgs};
use nanmask_cli::batch::{run_batch, BatchArgs};
use nanmask_cli::change::{run_change, ChangeArgs};
use nanmask_cli::clean::{run_clean, CleanArgs};
use nanmask_cli::list::run_list;
use nanmask_core::{Masker, ReferenceDate};

/// nanmask — input masking engine of the nan UI kit.
///
/// Formats raw keystrokes as CPF, CNPJ, CEP, phone, currency, natural
/// number, date-time and time displays, and cleans them back to digits.
#[derive(Parser, Debug)]
#[command(name = "nanmask", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Date used as "today" when clamping years (YYYY-MM-DD).
    /// Defaults to the current UTC date.
    #[arg(long, global = true)]
    reference_date: Option<ReferenceDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Format a value with a mask.
    Apply(ApplyArgs),

    /// Strip a value down to its digits.
    Clean(CleanArgs),

    /// Replay one field edit and print the display/value pair as JSON.
    Change(ChangeArgs),

    /// List the available masks.
    List,

    /// Replay JSON-lines edit records from stdin.
    Batch(BatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let reference = cli.reference_date.unwrap_or_else(ReferenceDate::today);
    tracing::debug!(%reference, "resolved reference date");
    let masker = Masker::new(reference);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Apply(args) => run_apply(&args, &masker, &mut out),
        Commands::Clean(args) => run_clean(&args, &mut out),
        Commands::Change(args) => run_change(&args, &masker, &mut out),
        Commands::List => run_list(&mut out),
        Commands::Batch(args) => run_batch(&args, &masker, std::io::stdin().lock(), &mut out),
    };

    if let Err(e) = out.flush() {
        tracing::error!("failed to flush stdout: {e}");
        return ExitCode::from(1);
    }

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
