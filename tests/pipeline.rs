//! End-to-end pipeline test against stub tshark/editcap executables.
//!
//! Builds shell-script stand-ins for the Wireshark tools, puts them first on
//! PATH, and runs the real [`WiresharkToolchain`] through a whole batch.
//! Verifies the exact bytes handed to the injection stage, including the
//! comma-to-newline keylog rewrite and the benign-warning classification.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use pcapdecrypt::batch::{run_batch, OutputPolicy};
use pcapdecrypt::error::{Error, ExtractError};
use pcapdecrypt::tools::WiresharkToolchain;

/// Stub tshark: always warns on stderr, emits comma-joined keys unless the
/// input name contains "plain".
const TSHARK_STUB: &str = r#"#!/bin/sh
echo "Warning: stub trailer cut short" >&2
case "$2" in
  *plain*) ;;
  *) printf 'key1,key2,key3\n' ;;
esac
"#;

/// Stub editcap: concatenates the keylog file and the input capture into the
/// output, so the test can see exactly what the real tool would have read.
const EDITCAP_STUB: &str = r#"#!/bin/sh
keylog="${2#tls,}"
cat "$keylog" "$3" > "$4"
"#;

fn install_stub(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn test_end_to_end_batch_with_stub_tools() {
    let bin_dir = tempfile::tempdir().unwrap();
    install_stub(bin_dir.path(), "tshark", TSHARK_STUB);
    install_stub(bin_dir.path(), "editcap", EDITCAP_STUB);

    let orig_path = std::env::var_os("PATH").unwrap_or_default();
    let mut paths = vec![bin_dir.path().to_path_buf()];
    paths.extend(std::env::split_paths(&orig_path));
    std::env::set_var("PATH", std::env::join_paths(paths).unwrap());

    let caps = tempfile::tempdir().unwrap();
    let traffic = caps.path().join("traffic.pcap");
    let plain = caps.path().join("plain.pcap");
    fs::write(&traffic, b"RAWPCAP").unwrap();
    fs::write(&plain, b"RAWPCAP").unwrap();

    let inputs = vec![traffic, plain.clone()];
    let report = run_batch(&WiresharkToolchain, &inputs, &OutputPolicy::Alongside).unwrap();

    // The trailer-less capture fails extraction despite the stderr warning;
    // the other one goes all the way through.
    assert_eq!(report.attempted, 2);
    assert_eq!(report.succeeded, 1);
    assert!(matches!(
        report.failures[0],
        (ref path, Error::Extraction(ExtractError::NoKeyData)) if *path == plain
    ));

    let dest = caps.path().join("decrypted_traffic.pcap");
    assert_eq!(report.last_output, Some(dest.clone()));

    // Keylog handed to editcap must be the field output with commas swapped
    // for newlines, byte for byte.
    let produced = fs::read(&dest).unwrap();
    assert_eq!(produced, b"key1\nkey2\nkey3RAWPCAP");
}
