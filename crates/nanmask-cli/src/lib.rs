//! # nanmask-cli — Masking Engine Command-Line Interface
//!
//! Exposes the masking engine to shell scripts and fixture generation.
//!
//! ## Subcommands
//!
//! - `apply` — Format a value with a mask
//! - `clean` — Strip a value down to its digits
//! - `change` — Replay one field edit and print the display/value pair
//! - `list` — List the available masks
//! - `batch` — Replay JSON-lines edit records from stdin
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers delegate to `nanmask-core` and write to a caller-supplied
//!   writer, so stdout stays machine-readable and tests can capture output.
//! - Logs go to stderr.

pub mod apply;
pub mod batch;
pub mod change;
pub mod clean;
pub mod list;
