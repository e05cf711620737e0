use clap::{Parser, Subcommand};

use crate::domain::{ShareCount, Threshold};

fn validate_threshold(s: &str) -> Result<Threshold, String> {
    let value: u16 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

fn validate_share_count(s: &str) -> Result<ShareCount, String> {
    let value: u16 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "mnemosss")]
#[command(about = "Split a freshly generated secret into mnemonic Shamir shares, or combine them back")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample a secret and split it into shares
    Split {
        /// Number of shares to create
        #[arg(short, long, value_parser = validate_share_count)]
        shares: ShareCount,

        /// Threshold: minimum number of shares needed to reconstruct (must be >= 2)
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Threshold,

        /// Use the 521-bit prime instead of the default 127-bit one
        #[arg(short, long)]
        long: bool,
    },
    /// Combine shares to reconstruct the original secret
    Combine {
        /// Path to a file of share words, or `-` to read from stdin
        input: String,
    },
}
