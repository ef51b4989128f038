//! Batch orchestration.
//!
//! Runs the extract/inject pipeline over a list of captures, strictly
//! sequentially. Every per-file failure is contained and recorded; only a
//! missing toolchain aborts before any file is touched. Calls into the
//! toolchain block until the external tool exits, so anything wrapping this
//! in an event loop has to run it off that loop.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::keylog;
use crate::tools::{Toolchain, TSHARK};

/// Where decrypted captures are written.
///
/// Keeps the front end's output-directory choice out of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPolicy {
    /// Next to the input file (default).
    Alongside,
    /// A caller-chosen directory, created on demand.
    Directory(PathBuf),
}

impl OutputPolicy {
    /// Directory a given input's decrypted copy goes to.
    pub fn dir_for(&self, input: &Path) -> PathBuf {
        match self {
            OutputPolicy::Alongside => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
            OutputPolicy::Directory(dir) => dir.clone(),
        }
    }
}

/// Destination for one input: `decrypted_<basename>` under the policy
/// directory.
pub fn destination_path(policy: &OutputPolicy, input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    policy.dir_for(input).join(format!("decrypted_{name}"))
}

/// Aggregate result of one batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files attempted. Equals the input count; the only way to attempt
    /// fewer is the toolchain guard, which yields no report at all.
    pub attempted: usize,
    /// Files that produced a decrypted capture.
    pub succeeded: usize,
    /// Per-file failures, in input order.
    pub failures: Vec<(PathBuf, Error)>,
    /// Destination of the most recent success, if any.
    pub last_output: Option<PathBuf>,
}

impl BatchReport {
    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// True when every attempted file succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process every input in order and collect the outcomes.
///
/// Errs only with [`Error::ToolUnavailable`], checked once before any file
/// is touched. Each file then runs extraction, keylog rewrite, and injection
/// to completion or first failure; a bad file never stops the batch.
pub fn run_batch<T: Toolchain>(
    tools: &T,
    inputs: &[PathBuf],
    policy: &OutputPolicy,
) -> Result<BatchReport> {
    if !tools.is_available() {
        return Err(Error::ToolUnavailable { tool: TSHARK });
    }

    let mut report = BatchReport::default();
    let total = inputs.len();
    for (idx, input) in inputs.iter().enumerate() {
        info!("processing {}/{}: {}", idx + 1, total, input.display());
        report.attempted += 1;
        match process_one(tools, input, policy) {
            Ok(dest) => {
                debug!("wrote {}", dest.display());
                report.succeeded += 1;
                report.last_output = Some(dest);
            }
            Err(err) => {
                warn!("{}: {}", input.display(), err);
                report.failures.push((input.clone(), err));
            }
        }
    }
    Ok(report)
}

/// One capture through the pipeline: extract, rewrite keylog, inject.
fn process_one<T: Toolchain>(tools: &T, input: &Path, policy: &OutputPolicy) -> Result<PathBuf> {
    if !input.is_file() {
        return Err(Error::FileNotFound {
            path: input.to_path_buf(),
        });
    }

    let dest = destination_path(policy, input);
    if let Some(dir) = dest.parent() {
        fs::create_dir_all(dir)?;
    }

    let keys = tools.extract_keys(input)?;

    // Fresh scratch keylog per input, removed on drop.
    let keylog_file = NamedTempFile::new()?;
    keylog::write_keylog_file(&keys, keylog_file.path())?;

    tools.inject_secrets(input, keylog_file.path(), &dest)?;
    Ok(dest)
}
