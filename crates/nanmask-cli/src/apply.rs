//! # Apply Subcommand
//!
//! Formats a single value with a mask and prints the display string.
//!
//! ```bash
//! nanmask apply --mask cpf 12345678901      # 123.456.789-01
//! nanmask apply --mask currency 12345       # R$ 123,45
//! nanmask apply --mask bogus "as typed"     # as typed
//! ```

use std::io::Write;

use anyhow::Result;
use clap::Args;

use nanmask_core::Masker;

/// Arguments for the apply subcommand.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Mask token (naturalNumber, cpf, cnpj, phone, cep, currency, datetime,
    /// time). Unknown tokens print the value unchanged.
    #[arg(long, short)]
    pub mask: Option<String>,

    /// Raw value to format.
    pub value: String,
}

/// Execute the apply subcommand.
pub fn run_apply(args: &ApplyArgs, masker: &Masker, out: &mut impl Write) -> Result<u8> {
    let formatted = masker.apply_token(&args.value, args.mask.as_deref());
    tracing::debug!(mask = ?args.mask, %formatted, "applied mask");
    writeln!(out, "{formatted}")?;
    Ok(0)
}
