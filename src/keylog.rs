//! TLS key material handling.
//!
//! The inspection tool emits every keylog line of a capture comma-joined
//! inside one field value; the editing tool wants the standard SSLKEYLOGFILE
//! layout of one entry per line. This module owns that transform and the
//! scratch keylog file the injection stage reads.

use std::fs;
use std::path::Path;

use crate::error::ExtractError;

/// Raw TLS key material as extracted from a capture's keylog trailer.
/// Non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial(String);

impl KeyMaterial {
    /// Wrap the inspection tool's field output. Returns `None` when the
    /// output is empty after trimming, i.e. the capture carries no keylog
    /// trailer.
    pub fn from_field_output(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Render in SSLKEYLOGFILE layout: one key entry per line. The comma to
    /// newline swap is byte-exact, nothing is appended or dropped.
    pub fn to_keylog(&self) -> String {
        self.0.replace(',', "\n")
    }
}

/// Write `keys` to `path` in keylog layout, truncating any prior content.
///
/// An empty file after the write fails the extraction stage; the injection
/// tool must never be handed an empty secrets file.
pub fn write_keylog_file(keys: &KeyMaterial, path: &Path) -> Result<(), ExtractError> {
    let text = keys.to_keylog();
    fs::write(path, &text)?;
    if fs::metadata(path)?.len() == 0 {
        return Err(ExtractError::EmptyKeylog);
    }
    Ok(())
}
