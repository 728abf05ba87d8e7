//! List subcommand: print every mask token with its digit capacity.

use std::io::Write;

use anyhow::Result;

use nanmask_core::MaskKind;

/// Execute the list subcommand.
pub fn run_list(out: &mut impl Write) -> Result<u8> {
    writeln!(out, "Available masks:")?;
    writeln!(out)?;
    for kind in MaskKind::all() {
        let capacity = kind
            .max_digits()
            .map_or_else(|| "unbounded".to_string(), |n| format!("{n} digits"));
        writeln!(out, "  {:<14} {capacity}", kind.as_str())?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} masks", MaskKind::all().len())?;
    Ok(0)
}
