//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - End-of-run summary rendering (capped failure list)

mod args;
mod report;

pub use args::Args;
pub use report::render_summary;
