//! External Wireshark toolchain.
//!
//! The whole pipeline delegates packet-format and cryptographic work to two
//! command-line tools shipped with Wireshark: `tshark` reads the capture and
//! extracts the keylog trailer field, `editcap` rewrites the capture with
//! the secrets embedded. Nothing in this crate parses capture bytes itself.
//!
//! [`Toolchain`] is the seam the batch orchestrator runs against, so tests
//! can script outcomes without Wireshark installed.

mod editcap;
mod tshark;

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, InjectError};
use crate::keylog::KeyMaterial;

/// Inspection tool: reads captures and extracts the keylog trailer field.
pub const TSHARK: &str = "tshark";
/// Editing tool: rewrites captures with embedded decryption secrets.
pub const EDITCAP: &str = "editcap";
/// Interactive analyzer, only used to open a finished capture on request.
pub const WIRESHARK: &str = "wireshark";

/// Look up an executable on the search path.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    for dir in env::split_paths(&path) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = dir.join(format!("{name}.exe"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Check whether a tool is resolvable on the search path. Never errors; any
/// lookup failure reads as "not available".
pub fn is_tool_available(name: &str) -> bool {
    find_in_path(name).is_some()
}

/// The two external operations the pipeline is built on.
pub trait Toolchain {
    /// True when the inspection tool is resolvable on the search path.
    fn is_available(&self) -> bool;

    /// Extract the TLS keylog trailer field values from `input`.
    fn extract_keys(&self, input: &Path) -> Result<KeyMaterial, ExtractError>;

    /// Rewrite `input` into `output` with the secrets from `keylog` embedded.
    fn inject_secrets(
        &self,
        input: &Path,
        keylog: &Path,
        output: &Path,
    ) -> Result<(), InjectError>;
}

/// Production toolchain backed by tshark and editcap.
#[derive(Debug, Default, Clone, Copy)]
pub struct WiresharkToolchain;

impl Toolchain for WiresharkToolchain {
    fn is_available(&self) -> bool {
        is_tool_available(TSHARK)
    }

    fn extract_keys(&self, input: &Path) -> Result<KeyMaterial, ExtractError> {
        tshark::extract_keys(input)
    }

    fn inject_secrets(
        &self,
        input: &Path,
        keylog: &Path,
        output: &Path,
    ) -> Result<(), InjectError> {
        editcap::inject_secrets(input, keylog, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonexistent_tool_is_unavailable() {
        assert!(!is_tool_available("definitely-not-a-real-tool-4afc1"));
    }
}
