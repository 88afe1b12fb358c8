//! Cumulative price sampling with counterfactual extrapolation.
//!
//! The pair program only folds elapsed time into its integrals when one of
//! its own mutating entrypoints runs. Between those syncs the spot price is
//! constant, so the integrals as of "now" are the reported values plus
//! `spot_ratio * elapsed`. This module performs that extrapolation without
//! touching the pair, making the sample a pure function of external inputs
//! that is safe to take any number of times per slot.

use crate::components::pair_observer::fixed_point::fraction;
use crate::components::pair_observer::pair_accounts::PriceIntegralSource;
use anchor_lang::prelude::*;
use ethnum::U256;

/// A matched pair of price integrals taken at one instant.
///
/// `integral0` accumulates (reserve1 / reserve0) over time, `integral1` the
/// inverse ratio, both in Q112.112-seconds wrapping modulo 2^256. The
/// timestamp wraps modulo 2^32; consumers must difference timestamps with
/// wrapping subtraction, never ordered comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegralSample {
    pub integral0: U256,
    pub integral1: U256,
    pub timestamp: u32,
}

/// Produce the pair's price integrals as of `now`.
///
/// When the pair synced in this very second the reported integrals are
/// already current and are returned verbatim. Otherwise both integrals are
/// extrapolated across the elapsed gap at the current spot ratio.
///
/// # Wraparound Arithmetic
///
/// Every operation here deliberately wraps:
/// - `now - last_sync` uses modular u32 subtraction, correct across a single
///   2^32 timestamp wraparound (only one can occur between real-world calls
///   at any practical cadence);
/// - the `ratio * elapsed` product and the integral addition wrap modulo
///   2^256, matching the pair program's own accumulator convention, so a
///   later subtraction of two samples recovers the true delta even when the
///   raw values have wrapped.
///
/// Fails with `DivisionByZero` when either reserve is empty: a degenerate
/// pair has no price and extrapolation would be meaningless.
pub fn current_cumulative_prices(
    source: &impl PriceIntegralSource,
    now: u32,
) -> Result<IntegralSample> {
    let (reserve_0, reserve_1, last_sync_timestamp) = source.get_reserves()?;

    let mut integral0 = source.price0_cumulative()?;
    let mut integral1 = source.price1_cumulative()?;

    if last_sync_timestamp != now {
        // Modular subtraction: correct across one timestamp wraparound.
        let elapsed = U256::from(now.wrapping_sub(last_sync_timestamp));

        // Wrapping on purpose, same modulus as the upstream accumulators.
        integral0 = integral0.wrapping_add(fraction(reserve_1, reserve_0)?.wrapping_mul(elapsed));
        integral1 = integral1.wrapping_add(fraction(reserve_0, reserve_1)?.wrapping_mul(elapsed));
    }

    Ok(IntegralSample {
        integral0,
        integral1,
        timestamp: now,
    })
}
