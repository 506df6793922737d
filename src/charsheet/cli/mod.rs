//! # CLI
//!
//! One possible client for charsheet. This is the only place that knows about
//! stdout/stderr, exit codes, and the terminal.
//!
//! Running `charsheet` with no command shows the profile, the same read view an
//! import switches to.
//!
//! - `commands`: context setup, dispatch, per-command handlers
//! - `render`: terminal output
//! - `setup`: clap definitions

mod commands;
mod render;
pub mod setup;

pub use commands::run;
