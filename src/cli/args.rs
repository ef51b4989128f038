//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::batch::OutputPolicy;

/// Decrypt F5 BIG-IP captures by injecting their TLS keylog trailers as
/// decryption secrets.
#[derive(Parser, Debug)]
#[command(name = "pcapdecrypt")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Capture files to decrypt
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write decrypted captures here instead of next to each input
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Open the last decrypted capture in Wireshark when done
    #[arg(long = "open")]
    pub open: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Output policy implied by the flags.
    pub fn output_policy(&self) -> OutputPolicy {
        match &self.output_dir {
            Some(dir) => OutputPolicy::Directory(dir.clone()),
            None => OutputPolicy::Alongside,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_alongside() {
        let args = Args::parse_from(["pcapdecrypt", "a.pcap"]);
        assert_eq!(args.output_policy(), OutputPolicy::Alongside);
    }

    #[test]
    fn test_output_dir_flag_selects_directory_policy() {
        let args = Args::parse_from(["pcapdecrypt", "-o", "/tmp/out", "a.pcap"]);
        assert_eq!(
            args.output_policy(),
            OutputPolicy::Directory(PathBuf::from("/tmp/out"))
        );
    }
}
