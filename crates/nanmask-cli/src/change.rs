//! # Change Subcommand
//!
//! Replays one edit of a masked input field and prints the resulting
//! `{"display": ..., "value": ...}` pair as JSON, the same shape a form
//! binding receives.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use nanmask_core::{resolve_token, Masker};

/// Arguments for the change subcommand.
#[derive(Args, Debug)]
pub struct ChangeArgs {
    /// Mask token. Omit for an unmasked field.
    #[arg(long, short)]
    pub mask: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Text as it stands in the field after the edit.
    pub input: String,
}

/// Execute the change subcommand.
pub fn run_change(args: &ChangeArgs, masker: &Masker, out: &mut impl Write) -> Result<u8> {
    let change = masker.change(&args.input, resolve_token(args.mask.as_deref()));
    let json = if args.pretty {
        serde_json::to_string_pretty(&change)
    } else {
        serde_json::to_string(&change)
    }
    .context("failed to serialize masked change")?;
    writeln!(out, "{json}")?;
    Ok(0)
}
