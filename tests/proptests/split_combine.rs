//! Property tests for the split/combine workflow

use mnemosss::domain::{ShareCount, SplitConfig, Threshold};
use mnemosss::{commands, frame, mnemonic};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A valid (threshold, share count) pair, threshold always `>= 2`.
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u16,
    num_shares: u16,
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_shares = (u8::arbitrary(g) % 19) + 2; // 2..=20
        let threshold = (u8::arbitrary(g) % (num_shares - 1)) + 2; // 2..=num_shares
        ValidParams {
            threshold: threshold.into(),
            num_shares: num_shares.into(),
        }
    }
}

fn split(params: ValidParams, seed: u64) -> commands::SplitOutcome {
    let config = SplitConfig::new(
        Threshold::new(params.threshold).unwrap(),
        ShareCount::new(params.num_shares).unwrap(),
    )
    .unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    commands::split(config, false, &mut rng).unwrap()
}

#[quickcheck]
fn prop_any_threshold_sized_subset_recombines(params: ValidParams, seed: u64) -> bool {
    let outcome = split(params, seed);
    let threshold = params.threshold as usize;

    let selected: Vec<String> = outcome.shares[0..threshold]
        .iter()
        .map(|m| m.as_str().to_string())
        .collect();

    commands::combine(&selected)
        .map(|recovered| recovered.as_str() == outcome.secret.as_str())
        .unwrap_or(false)
}

#[quickcheck]
fn prop_fewer_than_threshold_shares_never_recombine(params: ValidParams, seed: u64) -> bool {
    let outcome = split(params, seed);
    let short = (params.threshold as usize) - 1;

    let selected: Vec<String> = outcome.shares[0..short]
        .iter()
        .map(|m| m.as_str().to_string())
        .collect();

    commands::combine(&selected).is_err()
}

#[quickcheck]
fn prop_every_share_reports_the_configured_threshold(params: ValidParams, seed: u64) -> bool {
    let outcome = split(params, seed);

    outcome.shares.iter().all(|share| {
        let Ok(decoded) = mnemonic::decode(share.as_str()) else {
            return false;
        };
        let Ok((_, k, _)) = frame::unpack(&decoded) else {
            return false;
        };
        u16::from(k) == params.threshold
    })
}

#[quickcheck]
fn prop_shares_from_two_different_splits_never_recombine(
    params: ValidParams,
    seed_a: u64,
    seed_b: u64,
) -> bool {
    if seed_a == seed_b {
        return true;
    }

    let outcome_a = split(params, seed_a);
    let outcome_b = split(params, seed_b);
    if outcome_a.secret.as_str() == outcome_b.secret.as_str() {
        return true;
    }

    let threshold = params.threshold as usize;
    let half = threshold / 2;

    let mut mixed: Vec<String> = outcome_a.shares[0..half]
        .iter()
        .map(|m| m.as_str().to_string())
        .collect();
    mixed.extend(
        outcome_b.shares[0..(threshold - half)]
            .iter()
            .map(|m| m.as_str().to_string()),
    );

    match commands::combine(&mixed) {
        Err(_) => true,
        Ok(recovered) => {
            recovered.as_str() != outcome_a.secret.as_str()
                && recovered.as_str() != outcome_b.secret.as_str()
        }
    }
}
