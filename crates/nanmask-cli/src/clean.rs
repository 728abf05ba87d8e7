//! Clean subcommand: print the digits of a value.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use nanmask_core::clean_masked_value;

/// Arguments for the clean subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Formatted or raw value.
    pub value: String,
}

/// Execute the clean subcommand.
pub fn run_clean(args: &CleanArgs, out: &mut impl Write) -> Result<u8> {
    writeln!(out, "{}", clean_masked_value(&args.value))?;
    Ok(0)
}
