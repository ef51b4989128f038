//! Secret injection via editcap.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use crate::error::InjectError;

use super::EDITCAP;

/// Secret type tag editcap expects for TLS key material.
const SECRET_TYPE: &str = "tls";

/// Rewrite `input` into `output` with the keylog file embedded as a
/// decryption secrets block.
///
/// Unlike extraction there are no known-benign diagnostics here: any
/// non-zero exit is a hard failure for this capture.
pub fn inject_secrets(input: &Path, keylog: &Path, output: &Path) -> Result<(), InjectError> {
    let mut secrets_arg = OsString::from(format!("{SECRET_TYPE},"));
    secrets_arg.push(keylog.as_os_str());

    let out = Command::new(EDITCAP)
        .arg("--inject-secrets")
        .arg(&secrets_arg)
        .arg(input)
        .arg(output)
        .output()
        .map_err(InjectError::Spawn)?;

    if !out.status.success() {
        return Err(InjectError::ToolFailed {
            status: out.status,
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }
    Ok(())
}
