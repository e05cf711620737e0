//! Modular arithmetic over an arbitrary prime, backed by `num-bigint`.
//!
//! A no_std fixed-width limb type would do for `PRIME_SHORT` alone, but
//! `PRIME_LONG` is 521 bits, so both primes are handled uniformly through
//! `BigUint`/`BigInt`.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// `(a + b) mod p`
#[must_use]
pub fn add_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// `(a - b) mod p`, reduced into `[0, p)` by adding `p` when the naive
/// subtraction would go negative.
#[must_use]
pub fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    let b = b % p;
    if a >= b { a - b } else { p - (b - a) }
}

/// `(a * b) mod p`
#[must_use]
pub fn mul_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Modular inverse of `a` modulo prime `p`, via the extended Euclidean
/// algorithm rather than `a.modpow(p - 2, p)`: this stays correct even if
/// `p`'s primality were ever in question, and it is what the source this
/// spec distills from uses.
///
/// # Panics
/// Panics if `a mod p == 0`, which has no inverse; callers only ever
/// invoke this on a Lagrange denominator built from distinct nonzero
/// share indices, which cannot be zero mod either fixed prime in practice.
#[must_use]
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> BigUint {
    let a_mod = a % p;
    assert!(!a_mod.is_zero(), "modular inverse of zero is undefined");

    let (gcd, x, _y) = extended_gcd(&BigInt::from(a_mod), &BigInt::from(p.clone()));
    assert!(gcd.is_one(), "modulus is not coprime with a — is it prime?");

    let p_signed = BigInt::from(p.clone());
    let x_mod = ((x % &p_signed) + &p_signed) % &p_signed;
    x_mod
        .to_biguint()
        .expect("reduced into [0, p) so the sign is always non-negative")
}

/// Extended Euclidean algorithm: returns `(gcd, x, y)` such that
/// `a*x + b*y == gcd`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        (old_r, r) = (r.clone(), &old_r - &quotient * &r);
        (old_s, s) = (s.clone(), &old_s - &quotient * &s);
        (old_t, t) = (t.clone(), &old_t - &quotient * &t);
    }

    (old_r, old_s, old_t)
}

/// Reduces a `BigInt` that may be negative into `BigUint` residue `[0, p)`.
#[must_use]
pub fn reduce_signed(value: &BigInt, p: &BigUint) -> BigUint {
    let p_signed = BigInt::from(p.clone());
    let reduced = ((value % &p_signed) + &p_signed) % &p_signed;
    match reduced.sign() {
        Sign::Minus => unreachable!("reduced into [0, p) above"),
        _ => reduced.to_biguint().expect("non-negative by construction"),
    }
}
