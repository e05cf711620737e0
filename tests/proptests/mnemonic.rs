//! Property tests for the mnemonic codec

use mnemosss::mnemonic;
use num_bigint::BigUint;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Wrapper for arbitrary non-negative integers, built from a bounded byte
/// vector so generated cases stay well within a u64 while still exercising
/// multi-word encodings.
#[derive(Clone, Debug)]
struct ArbitraryInt(BigUint);

impl Arbitrary for ArbitraryInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 16;
        let bytes: Vec<u8> = (0..len).map(|_| u8::arbitrary(g)).collect();
        ArbitraryInt(BigUint::from_bytes_be(&bytes))
    }
}

#[quickcheck]
fn prop_encode_decode_round_trip(value: ArbitraryInt) -> bool {
    let ArbitraryInt(n) = value;
    let encoded = mnemonic::encode(&n).unwrap();
    mnemonic::decode(&encoded).unwrap() == n
}

#[quickcheck]
fn prop_encoded_words_are_all_lowercase_wordlist_entries(value: ArbitraryInt) -> bool {
    let ArbitraryInt(n) = value;
    let encoded = mnemonic::encode(&n).unwrap();
    encoded
        .split_whitespace()
        .all(|word| word.chars().all(|c| c.is_ascii_lowercase()))
}

#[quickcheck]
fn prop_decode_is_case_insensitive(value: ArbitraryInt) -> bool {
    let ArbitraryInt(n) = value;
    let encoded = mnemonic::encode(&n).unwrap();
    mnemonic::decode(&encoded.to_uppercase()).unwrap() == n
}
