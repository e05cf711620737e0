//! Error taxonomy for the mnemonic Shamir secret sharing engine.
//!
//! These are the engine's own errors, distinct from the `anyhow::Error`
//! the CLI and WASM layers wrap them in for user-facing context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("wordlist resource is invalid: {0}")]
    ConfigurationError(String),

    #[error("word '{token}' is not in the wordlist")]
    InvalidWord { token: String },

    #[error("checksum mismatch: share data does not match its CRC-32")]
    ChecksumMismatch,

    #[error("{bits} bits are too small to hold value {value}")]
    BitOverflow { bits: u32, value: String },

    #[error("threshold and share count cannot exceed 255")]
    TooManyShares,

    #[error("threshold must be at least 2")]
    ThresholdTooSmall,

    #[error("share count must be at least the threshold")]
    NotEnoughShares,

    #[error("duplicate share index {x}")]
    DuplicateShare { x: u8 },

    #[error("share #{index} is invalid: {cause}")]
    InvalidShare {
        index: usize,
        #[source]
        cause: Box<EngineError>,
    },

    #[error("have {have} shares but need {need}")]
    InsufficientShares { have: usize, need: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;
