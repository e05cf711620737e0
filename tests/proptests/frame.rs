//! Property tests for the frame codec

use mnemosss::frame;
use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

#[derive(Clone, Debug)]
struct ArbitraryY(BigUint);

impl Arbitrary for ArbitraryY {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 64;
        let bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        ArbitraryY(BigUint::from_bytes_be(&bytes))
    }
}

#[quickcheck]
fn prop_pack_unpack_round_trip(y: ArbitraryY, k: u8, x: u8) -> bool {
    let ArbitraryY(y) = y;
    match frame::pack(&y, k, x) {
        Ok(framed) => match frame::unpack(&framed) {
            Ok((decoded_y, decoded_k, decoded_x)) => {
                decoded_y == y && decoded_k == k && decoded_x == x
            }
            Err(_) => false,
        },
        Err(_) => true,
    }
}

#[quickcheck]
fn prop_flipping_a_bit_above_the_checksum_is_detected(y: ArbitraryY, k: u8, x: u8, bit: u8) -> bool {
    let ArbitraryY(y) = y;
    let Ok(framed) = frame::pack(&y, k, x) else {
        return true;
    };

    // Bits [0, 32) are the checksum itself; flip somewhere at or above bit 32.
    let shift = 32 + u32::from(bit);
    let corrupted = framed ^ (BigUint::from(1u32) << shift);

    frame::unpack(&corrupted).is_err()
}
