//! Key extraction via tshark.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::ExtractError;
use crate::keylog::KeyMaterial;

use super::TSHARK;

/// Display filter and field for the F5 BIG-IP TLS keylog trailer.
const KEYLOG_FIELD: &str = "f5ethtrailer.tls.keylog";

/// stderr fragments tshark emits on harmless inputs, sometimes together
/// with a non-zero exit. Matched as case-insensitive substrings.
const BENIGN_STDERR: &[&str] = &["warning", "cut short"];

/// Run tshark against `input` and return the keylog trailer field values.
///
/// tshark exits non-zero for conditions that still yield usable key data
/// (truncated last packet, unknown trailer fields), so the exit status is
/// ignored; stderr is classified against [`BENIGN_STDERR`] instead.
pub fn extract_keys(input: &Path) -> Result<KeyMaterial, ExtractError> {
    // Fixed-arity argv, never a shell string.
    let output = Command::new(TSHARK)
        .arg("-r")
        .arg(input)
        .args(["-Y", KEYLOG_FIELD, "-T", "fields", "-e", KEYLOG_FIELD])
        .output()
        .map_err(ExtractError::Spawn)?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        if !is_benign_stderr(stderr) {
            return Err(ExtractError::ToolFailed {
                stderr: stderr.to_string(),
            });
        }
        debug!("benign tshark stderr: {stderr}");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    KeyMaterial::from_field_output(&stdout).ok_or(ExtractError::NoKeyData)
}

fn is_benign_stderr(stderr: &str) -> bool {
    let lower = stderr.to_lowercase();
    BENIGN_STDERR.iter().any(|pat| lower.contains(pat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_stderr_is_benign() {
        assert!(is_benign_stderr("Warning: unknown ethertype in trailer"));
        assert!(is_benign_stderr("WARNING: something"));
    }

    #[test]
    fn test_cut_short_stderr_is_benign() {
        assert!(is_benign_stderr(
            "tshark: the capture file appears to have been cut short"
        ));
    }

    #[test]
    fn test_other_stderr_is_a_hard_failure() {
        assert!(!is_benign_stderr(
            "tshark: The file \"x.pcap\" doesn't exist."
        ));
    }
}
