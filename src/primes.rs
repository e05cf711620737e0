//! The two fixed prime field moduli the engine operates over.
//!
//! Named after their ordinal position in the standard list of Mersenne
//! prime exponents (2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, ...):
//! the 12th exponent is 127, the 13th is 521. `PRIME_SHORT` is the default
//! used by `split`; `PRIME_LONG` is selected by the caller's `long` flag
//! and auto-detected during `combine` by the decoded share's bit length
//! (see [`crate::recovery`]).

use num_bigint::BigUint;
use num_traits::One;
use std::sync::LazyLock;

/// Bit length above which a decoded mnemonic is assumed to carry a
/// `PRIME_LONG` share rather than a `PRIME_SHORT` one.
pub const AUTO_DETECT_BIT_THRESHOLD: u64 = 256;

/// The 12th Mersenne prime, `2^127 - 1`. Default modulus for `split`.
pub static PRIME_SHORT: LazyLock<BigUint> =
    LazyLock::new(|| (BigUint::one() << 127u32) - BigUint::one());

/// The 13th Mersenne prime, `2^521 - 1`. Selected by the `long` flag.
pub static PRIME_LONG: LazyLock<BigUint> =
    LazyLock::new(|| (BigUint::one() << 521u32) - BigUint::one());

/// Which fixed prime a split or combine operation is working over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeChoice {
    Short,
    Long,
}

impl PrimeChoice {
    #[must_use]
    pub fn modulus(self) -> &'static BigUint {
        match self {
            PrimeChoice::Short => &PRIME_SHORT,
            PrimeChoice::Long => &PRIME_LONG,
        }
    }

    /// Chooses a prime the way `split` does: an explicit caller flag.
    #[must_use]
    pub fn from_long_flag(long: bool) -> Self {
        if long { PrimeChoice::Long } else { PrimeChoice::Short }
    }

    /// Chooses a prime the way `combine` does: by inspecting the decoded
    /// (pre-unpack) mnemonic integer's bit length.
    #[must_use]
    pub fn from_decoded_bits(bits: u64) -> Self {
        if bits > AUTO_DETECT_BIT_THRESHOLD {
            PrimeChoice::Long
        } else {
            PrimeChoice::Short
        }
    }
}
