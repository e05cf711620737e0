//! Bijection between a non-negative integer and a base-1024 word sequence.

use crate::error::Result;
use crate::wordlist::{self, RADIX_BITS};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use zeroize::Zeroizing;

/// A mnemonic string handed back to a caller, wiped from memory on drop.
///
/// Wraps the output of [`encode`] for values that leave the engine as
/// user-facing text (a secret or a share), the way secret material is
/// expected to be handled once it exists as a plain string.
#[derive(Clone)]
pub struct Mnemonic(Zeroizing<String>);

impl Mnemonic {
    #[must_use]
    pub fn new(text: String) -> Self {
        Self(Zeroizing::new(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mnemonic(<redacted>)")
    }
}

/// Encodes `n` as the least-significant-first sequence of wordlist tokens
/// that spell out its base-1024 digits. `n == 0` encodes to the empty
/// string — callers never encode zero as a secret or share value.
pub fn encode(n: &BigUint) -> Result<String> {
    if n.is_zero() {
        return Ok(String::new());
    }

    let wl = wordlist::instance()?;
    let mut words = Vec::new();
    let mut remaining = n.clone();
    let radix = BigUint::from(wordlist::RADIX);

    while !remaining.is_zero() {
        let digit = (&remaining % &radix).to_u32_digits();
        let digit = digit.first().copied().unwrap_or(0);
        #[allow(clippy::cast_possible_truncation, reason = "digit < RADIX (1024) fits in u16")]
        let digit = digit as u16;
        let word = wl
            .word_of(digit)
            .expect("digit is always < RADIX, which is the wordlist length");
        words.push(word.to_string());
        remaining >>= RADIX_BITS;
    }

    Ok(words.join(" "))
}

/// Decodes a whitespace-separated word sequence back into its integer
/// value. Empty input decodes to zero.
pub fn decode(s: &str) -> Result<BigUint> {
    let wl = wordlist::instance()?;
    let mut value = BigUint::zero();

    for (position, word) in s.split_whitespace().enumerate() {
        let digit = wl.index_of(word)?;
        value += BigUint::from(digit) << (RADIX_BITS as usize * position);
    }

    Ok(value)
}
