//! Unit tests for amount conversion through the committed averages.

use super::helpers::q112;
use crate::components::pair_observer::converter::{convert_0_to_1, convert_1_to_0};
use crate::components::pair_observer::fixed_point::Q112_ONE;
use crate::error::PairObserverError;
use ethnum::U256;

#[test]
fn zero_amount_is_always_zero() {
    assert_eq!(convert_0_to_1(0, q112(1_000)).expect("zero in"), 0);
    assert_eq!(convert_1_to_0(0, q112(1_000)).expect("zero in"), 0);
}

#[test]
fn uncommitted_average_converts_everything_to_zero() {
    // Before the first window closes the stored average is zero; conversion
    // through it succeeds and yields zero rather than erroring.
    assert_eq!(convert_0_to_1(1_000_000, U256::ZERO).expect("zero rate"), 0);
    assert_eq!(convert_1_to_0(u128::MAX, U256::ZERO).expect("zero rate"), 0);
}

#[test]
fn unit_average_is_the_identity_in_both_directions() {
    for amount in [1u128, 42, u128::MAX] {
        assert_eq!(convert_0_to_1(amount, Q112_ONE).expect("rate 1.0"), amount);
        assert_eq!(convert_1_to_0(amount, Q112_ONE).expect("rate 1.0"), amount);
    }
}

#[test]
fn reciprocal_averages_invert_each_other() {
    // average0 = 4.0, average1 = 0.25: converting forward then back over an
    // exactly-representable pair of rates recovers the original amount.
    let average0 = q112(4);
    let average1 = Q112_ONE / U256::from(4u8);

    let out = convert_0_to_1(1_000, average0).expect("forward");
    assert_eq!(out, 4_000);
    assert_eq!(convert_1_to_0(out, average1).expect("back"), 1_000);
}

#[test]
fn overflow_propagates_from_the_fixed_point_core() {
    assert_eq!(
        convert_0_to_1(u128::MAX, q112(4)).unwrap_err(),
        PairObserverError::Overflow.into()
    );
    assert_eq!(
        convert_1_to_0(u128::MAX, q112(4)).unwrap_err(),
        PairObserverError::Overflow.into()
    );
}
