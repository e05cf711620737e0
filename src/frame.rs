//! Packs/unpacks a share's `(y, threshold, index)` triple together with a
//! CRC-32 checksum into a single integer, bit-shift style.

use crate::error::{EngineError, Result};
use crc::{CRC_32_ISO_HDLC, Crc};
use num_bigint::BigUint;
use num_traits::Zero;

const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Shifts `n` left by `b` bits and ORs in `d`, rejecting `d` values that
/// would not fit in `b` bits. Uses the strict `<` form of the overflow
/// check (not `<=`), which is the only form that accepts `d == (1<<b)-1`.
fn shift_left(n: &BigUint, b: u32, d: u64) -> Result<BigUint> {
    let max = (1u64 << b) - 1;
    if max < d {
        return Err(EngineError::BitOverflow {
            bits: b,
            value: d.to_string(),
        });
    }
    Ok((n << b) | BigUint::from(d))
}

fn shift_right(n: &BigUint, b: u32) -> (BigUint, BigUint) {
    let mask = (BigUint::from(1u32) << b) - BigUint::from(1u32);
    (n >> b, n & mask)
}

/// CRC byte length the way the source computes it: `⌊log2(n)⌋`, used
/// directly as a *byte* count rather than a *bit* count. This preserves
/// the exact (imperfectly allocated) round-trippable behavior rather than
/// "fixing" it — see `SPEC_FULL.md` §2 Frame codec.
fn crc_byte_length(n: &BigUint) -> usize {
    let bits = n.bits();
    bits.saturating_sub(1) as usize
}

fn crc_bytes(n: &BigUint) -> Vec<u8> {
    let byte_len = crc_byte_length(n);
    let minimal = n.to_bytes_be();
    if minimal.len() >= byte_len {
        minimal[minimal.len() - byte_len..].to_vec()
    } else {
        let mut padded = vec![0u8; byte_len - minimal.len()];
        padded.extend_from_slice(&minimal);
        padded
    }
}

fn checksum(n: &BigUint) -> u32 {
    CRC32.checksum(&crc_bytes(n))
}

/// Packs `(y, k, x)` into a single framed integer:
/// `((y << 8 | k) << 8 | x) << 32 | crc`.
pub fn pack(y: &BigUint, k: u8, x: u8) -> Result<BigUint> {
    let p1 = shift_left(y, 8, u64::from(k))?;
    let p2 = shift_left(&p1, 8, u64::from(x))?;
    let c = checksum(&p2);
    shift_left(&p2, 32, u64::from(c))
}

/// Inverse of [`pack`]: verifies the checksum before splitting out the
/// fields, so a corrupted frame never silently yields garbage `(k, x)`.
pub fn unpack(f: &BigUint) -> Result<(BigUint, u8, u8)> {
    let (upper, c) = shift_right(f, 32);
    let expected = checksum(&upper);
    let actual = c
        .to_u32_digits()
        .first()
        .copied()
        .unwrap_or(0);
    if expected != actual {
        return Err(EngineError::ChecksumMismatch);
    }

    let (upper2, x) = shift_right(&upper, 8);
    let (y, k) = shift_right(&upper2, 8);

    let x = biguint_to_u8(&x);
    let k = biguint_to_u8(&k);
    Ok((y, k, x))
}

fn biguint_to_u8(n: &BigUint) -> u8 {
    n.to_u32_digits().first().copied().unwrap_or(0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack_round_trips() {
        let y = BigUint::from(0x1234_5678_90AB_CDEFu64);
        let (decoded_y, decoded_k, decoded_x) = unpack(&pack(&y, 3, 5).unwrap()).unwrap();
        assert_eq!(decoded_y, y);
        assert_eq!(decoded_k, 3);
        assert_eq!(decoded_x, 5);
    }

    #[test]
    fn pack_unpack_round_trips_for_max_k_and_x() {
        let y = BigUint::from(42u32);
        let (decoded_y, decoded_k, decoded_x) = unpack(&pack(&y, 255, 255).unwrap()).unwrap();
        assert_eq!(decoded_y, y);
        assert_eq!(decoded_k, 255);
        assert_eq!(decoded_x, 255);
    }

    #[test]
    fn corrupting_a_bit_outside_the_crc_breaks_the_checksum() {
        let y = BigUint::from(0xDEAD_BEEFu64);
        let framed = pack(&y, 3, 5).unwrap();
        // Flip a bit comfortably above the low 32 CRC bits.
        let corrupted = framed ^ (BigUint::from(1u32) << 40);
        assert!(matches!(unpack(&corrupted), Err(EngineError::ChecksumMismatch)));
    }

    #[test]
    fn shift_left_accepts_the_maximal_value_for_its_bit_width() {
        let n = BigUint::zero();
        assert!(shift_left(&n, 8, 255).is_ok());
    }

    #[test]
    fn shift_left_rejects_overflowing_values() {
        let n = BigUint::zero();
        assert!(matches!(
            shift_left(&n, 8, 256),
            Err(EngineError::BitOverflow { .. })
        ));
    }

    #[test]
    fn crc_byte_length_matches_the_source_formula() {
        // n = 256 has bit_length 9, so the (byte-count-as-bit-count) rule
        // yields 8, per SPEC_FULL.md's Open Question 1 discussion.
        assert_eq!(crc_byte_length(&BigUint::from(256u32)), 8);
    }
}
