//! Recovers a secret mnemonic from a collection of share mnemonics.

use crate::domain::ShareIndex;
use crate::error::{EngineError, Result};
use crate::primes::PrimeChoice;
use crate::sss::{self, SharePoint};
use crate::{frame, mnemonic};

/// Decodes, unframes, and combines `shares`, returning the recovered
/// secret re-encoded as a mnemonic.
///
/// # Errors
/// `InvalidShare{index, cause}` wraps any decode/unpack/combine failure
/// with the 0-based index of the offending input string.
/// `InsufficientShares{have, need}` if fewer shares were supplied than
/// the threshold the shares themselves advertise.
pub fn combine(shares: &[String]) -> Result<String> {
    let mut points = Vec::with_capacity(shares.len());
    let mut need = 0u8;
    let mut prime = PrimeChoice::Short;

    for (index, raw) in shares.iter().enumerate() {
        let (point, k, chosen_prime) = decode_share(raw.trim()).map_err(|cause| EngineError::InvalidShare {
            index,
            cause: Box::new(cause),
        })?;
        need = need.max(k);
        prime = chosen_prime;
        points.push(point);
    }

    if points.len() < need as usize {
        return Err(EngineError::InsufficientShares {
            have: points.len(),
            need: need as usize,
        });
    }

    let secret = sss::combine(&points, prime.modulus())?;
    mnemonic::encode(&secret)
}

fn decode_share(raw: &str) -> Result<(SharePoint, u8, PrimeChoice)> {
    let decoded = mnemonic::decode(raw)?;
    let prime = PrimeChoice::from_decoded_bits(decoded.bits());
    let (y, k, x) = frame::unpack(&decoded)?;
    let x = ShareIndex::new(x)?;
    Ok((SharePoint { x, y }, k, prime))
}
