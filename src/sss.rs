//! Polynomial construction, evaluation and Lagrange reconstruction over a
//! prime field.

use crate::domain::ShareIndex;
use crate::error::{EngineError, Result};
use crate::field;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::Rng;
use std::collections::HashSet;

/// A single share point `(x, y)` on the secret polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePoint {
    pub x: ShareIndex,
    pub y: BigUint,
}

/// Draws a uniform value in `[0, p)`.
fn uniform_below(rng: &mut impl Rng, p: &BigUint) -> BigUint {
    let byte_len = p.bits().div_ceil(8) as usize;
    loop {
        let mut bytes = vec![0u8; byte_len];
        rng.fill(bytes.as_mut_slice());
        let candidate = BigUint::from_bytes_be(&bytes);
        if candidate < *p {
            return candidate;
        }
    }
}

/// Splits a freshly sampled secret into `n` share points for a degree
/// `k - 1` polynomial over `p`. Returns `(secret, points)`.
///
/// # Errors
/// `ThresholdTooSmall` if `k < 2`; `TooManyShares` if `k > 255` or
/// `n > 255`; `NotEnoughShares` if `n < k`.
pub fn split(
    k: u16,
    n: u16,
    p: &BigUint,
    rng: &mut impl Rng,
) -> Result<(BigUint, Vec<SharePoint>)> {
    if k < 2 {
        return Err(EngineError::ThresholdTooSmall);
    }
    if k > 255 || n > 255 {
        return Err(EngineError::TooManyShares);
    }
    if n < k {
        return Err(EngineError::NotEnoughShares);
    }

    let secret = uniform_below(rng, p);
    let mut coefficients = vec![secret.clone()];
    for _ in 1..k {
        coefficients.push(uniform_below(rng, p));
    }

    let mut points = Vec::with_capacity(n as usize);
    for x in 1..=n {
        #[allow(clippy::cast_possible_truncation, reason = "n <= 255 checked above")]
        let x_u8 = x as u8;
        let y = evaluate(&coefficients, x_u8, p);
        points.push(SharePoint { x: ShareIndex::new(x_u8)?, y });
    }

    Ok((secret, points))
}

/// Evaluates the polynomial with the given coefficients (constant term
/// first) at `x` via Horner's rule.
fn evaluate(coefficients: &[BigUint], x: u8, p: &BigUint) -> BigUint {
    let x = BigUint::from(x);
    let mut result = BigUint::zero();
    for coeff in coefficients.iter().rev() {
        result = field::add_mod(&field::mul_mod(&result, &x, p), coeff, p);
    }
    result
}

/// Reconstructs `f(0)` from `>= 2` distinct-x share points via Lagrange
/// interpolation.
///
/// # Errors
/// `DuplicateShare` if two points share the same `x`.
pub fn combine(points: &[SharePoint], p: &BigUint) -> Result<BigUint> {
    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(*point.x) {
            return Err(EngineError::DuplicateShare { x: *point.x });
        }
    }
    if points.len() < 2 {
        return Err(EngineError::InsufficientShares {
            have: points.len(),
            need: 2,
        });
    }

    let mut secret = BigUint::zero();
    for (i, pi) in points.iter().enumerate() {
        let mut num = BigInt::from(1);
        let mut den = BigUint::from(1u32);
        let xi = BigUint::from(*pi.x);

        for (j, pj) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            let xj = BigUint::from(*pj.x);
            num *= BigInt::from(0) - BigInt::from(*pj.x);
            den = field::mul_mod(&den, &field::sub_mod(&xi, &xj, p), p);
        }

        let num = field::reduce_signed(&num, p);
        let den_inv = field::mod_inverse(&den, p);
        let coeff = field::mul_mod(&num, &den_inv, p);
        secret = field::add_mod(&secret, &field::mul_mod(&pi.y, &coeff, p), p);
    }

    Ok(secret)
}
