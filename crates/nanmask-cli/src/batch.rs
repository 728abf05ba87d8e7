//! # Batch Subcommand
//!
//! Replays a stream of field edits. Each stdin line is a JSON record:
//!
//! ```json
//! {"value": "12345678901", "mask": "cpf"}
//! {"value": "free text"}
//! ```
//!
//! and produces one `MaskedChange` JSON line on stdout. Blank lines are
//! skipped. A malformed line is logged with its line number and makes the
//! command exit with status 1, but the remaining lines are still processed.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use nanmask_core::{resolve_token, Masker};

/// Arguments for the batch subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Stop at the first malformed line instead of skipping it.
    #[arg(long)]
    pub fail_fast: bool,
}

/// One edit record read from the input stream.
#[derive(Debug, Deserialize)]
pub struct BatchRecord {
    /// Text as it stands in the field.
    pub value: String,
    /// Mask token; absent or unknown means no mask.
    #[serde(default)]
    pub mask: Option<String>,
}

/// Execute the batch subcommand.
pub fn run_batch(
    args: &BatchArgs,
    masker: &Masker,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<u8> {
    let mut processed = 0usize;
    let mut malformed = 0usize;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read input line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: BatchRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                malformed += 1;
                tracing::error!(line = line_no, "malformed record: {e}");
                if args.fail_fast {
                    break;
                }
                continue;
            }
        };

        let change = masker.change(&record.value, resolve_token(record.mask.as_deref()));
        let json = serde_json::to_string(&change)
            .with_context(|| format!("failed to serialize result for line {line_no}"))?;
        writeln!(out, "{json}")?;
        processed += 1;
    }

    tracing::info!(processed, malformed, "batch complete");
    Ok(if malformed == 0 { 0 } else { 1 })
}
