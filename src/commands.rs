//! CLI/WASM-facing wrappers over the engine: validate inputs, run the
//! engine, and wrap failures in `anyhow` with user-facing context.

use anyhow::{Context, Result};
use rand::Rng;

use crate::domain::SplitConfig;
use crate::mnemonic::Mnemonic;
use crate::primes::PrimeChoice;
use crate::{frame, mnemonic, recovery, sss};

/// Outcome of a split: the freshly sampled secret, its share mnemonics,
/// and the bit length of the prime the split was performed over.
pub struct SplitOutcome {
    pub secret: Mnemonic,
    pub shares: Vec<Mnemonic>,
    pub prime_bit_length: u64,
}

/// Samples a fresh secret and splits it into `config.share_count()`
/// shares, `config.threshold()` of which reconstruct it.
///
/// # Errors
/// Returns an error if the engine rejects the configuration (shouldn't
/// happen once `config` was constructed successfully) or if packing a
/// share overflows its frame.
pub fn split(config: SplitConfig, long: bool, rng: &mut impl Rng) -> Result<SplitOutcome> {
    let prime = PrimeChoice::from_long_flag(long).modulus();
    let k = *config.threshold();
    let n = *config.share_count();

    let (secret, points) =
        sss::split(k.into(), n.into(), prime, rng).context("Failed to split secret into shares")?;

    let secret_mnemonic = mnemonic::encode(&secret).context("Failed to encode secret")?;

    let mut shares = Vec::with_capacity(points.len());
    for point in &points {
        let framed =
            frame::pack(&point.y, k, *point.x).with_context(|| format!("Failed to frame share #{}", *point.x))?;
        let encoded = mnemonic::encode(&framed).context("Failed to encode share")?;
        shares.push(Mnemonic::new(encoded));
    }

    Ok(SplitOutcome {
        secret: Mnemonic::new(secret_mnemonic),
        shares,
        prime_bit_length: prime.bits(),
    })
}

/// Recovers the secret mnemonic from a collection of share mnemonics.
///
/// # Errors
/// Returns an error if any share fails to decode, checksums mismatch, or
/// too few shares were supplied relative to their advertised threshold.
pub fn combine(share_strings: &[String]) -> Result<Mnemonic> {
    anyhow::ensure!(!share_strings.is_empty(), "No shares provided");

    let recovered = recovery::combine(share_strings).context("Failed to recover secret")?;
    Ok(Mnemonic::new(recovered))
}
