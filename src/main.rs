//! pcapdecrypt CLI entry point.

use std::path::Path;
use std::process::{Command, ExitCode};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use pcapdecrypt::batch::run_batch;
use pcapdecrypt::cli::{render_summary, Args};
use pcapdecrypt::tools::{WiresharkToolchain, WIRESHARK};

/// Exit status: 0 when every file succeeded, 1 when at least one file
/// failed, 2 when the toolchain is unavailable.
fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let policy = args.output_policy();
    let report = match run_batch(&WiresharkToolchain, &args.inputs, &policy) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    print!("{}", render_summary(&report));

    if args.open {
        if let Some(last) = &report.last_output {
            open_in_wireshark(last);
        }
    }

    if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Hand the decrypted capture to Wireshark, detached. Failing to launch the
/// viewer is not a batch failure.
fn open_in_wireshark(capture: &Path) {
    if let Err(err) = Command::new(WIRESHARK).arg("-r").arg(capture).spawn() {
        warn!("could not launch {WIRESHARK}: {err}");
    }
}
