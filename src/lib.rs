// Internal library for testing purposes
// Not intended for external use as a library

#[cfg(feature = "cli")]
pub mod cli;

pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod frame;
pub mod mnemonic;
pub mod parser;
pub mod primes;
pub mod recovery;
pub mod sss;
pub mod wordlist;

// WASM bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;
