//! Error types for pcapdecrypt.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for pcapdecrypt operations.
///
/// Everything except [`Error::ToolUnavailable`] is scoped to a single input
/// file: the batch orchestrator records it and moves on to the next capture.
#[derive(Error, Debug)]
pub enum Error {
    /// A required external tool is not on the search path. Fatal for the
    /// whole batch; no file is attempted.
    #[error("{tool} not found in PATH; install Wireshark and make sure {tool} is on your PATH")]
    ToolUnavailable { tool: &'static str },

    /// An input path does not resolve to a regular file.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Keylog extraction failed for this capture.
    #[error("keylog extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    /// Secret injection failed for this capture.
    #[error("decryption failed: {0}")]
    Injection(#[from] InjectError),

    /// Any other I/O failure while processing this capture.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the key extraction stage.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The inspection tool wrote a non-benign diagnostic to stderr.
    #[error("error running tshark: {stderr}")]
    ToolFailed { stderr: String },

    /// The capture carries no TLS keylog trailer. Expected for ordinary
    /// captures, so it gets its own variant instead of a tool error.
    #[error("no TLS keylog data found in the capture")]
    NoKeyData,

    /// The keylog scratch file came out empty after the rewrite.
    #[error("no keylog data")]
    EmptyKeylog,

    /// The inspection tool could not be launched.
    #[error("failed to run tshark: {0}")]
    Spawn(#[source] std::io::Error),

    /// Keylog scratch file I/O failed.
    #[error("keylog file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the secret injection stage.
#[derive(Error, Debug)]
pub enum InjectError {
    /// The editing tool exited non-zero. Unlike extraction there are no
    /// known-benign diagnostics here.
    #[error("editcap failed ({status}): {stderr}")]
    ToolFailed { status: ExitStatus, stderr: String },

    /// The editing tool could not be launched.
    #[error("failed to run editcap: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Convenience result type for pcapdecrypt operations.
pub type Result<T> = std::result::Result<T, Error>;
