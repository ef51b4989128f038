//! pcapdecrypt - Decrypt F5 BIG-IP TLS captures.
//!
//! F5 load balancers can append a keylog trailer to mirrored packets,
//! carrying the TLS session keys for the traffic in the capture. This
//! library drives the Wireshark command-line tools to pull that trailer out
//! with `tshark` and re-emit the capture with the secrets embedded via
//! `editcap`, so the result opens pre-decrypted in any analyzer.
//!
//! # Example
//!
//! ```no_run
//! use pcapdecrypt::batch::{run_batch, OutputPolicy};
//! use pcapdecrypt::tools::WiresharkToolchain;
//!
//! fn main() -> pcapdecrypt::Result<()> {
//!     let inputs = vec!["session.pcap".into()];
//!     let report = run_batch(&WiresharkToolchain, &inputs, &OutputPolicy::Alongside)?;
//!     println!("{} of {} decrypted", report.succeeded, report.attempted);
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod cli;
pub mod error;
pub mod keylog;
pub mod tools;

pub use error::{Error, Result};
