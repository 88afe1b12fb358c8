//! Unit conversion through a committed window average.
//!
//! Conversion is a thin shell over `mul_shift_q112`; it deliberately performs
//! no freshness or liquidity checks. The average only ever describes the most
//! recently closed window, and deciding whether that window is recent enough
//! is the calling layer's responsibility.

use crate::components::pair_observer::fixed_point::mul_shift_q112;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Convert an amount of token0 into token1 units at the window-average rate.
///
/// A zero amount always yields zero, including before the first committed
/// window (when the average itself is still zero). Fails only with
/// `Overflow` for amounts too large for the 256-bit intermediate.
#[inline(always)]
pub fn convert_0_to_1(amount_in: u128, average0: U256) -> Result<u128> {
    mul_shift_q112(amount_in, average0)
}

/// Convert an amount of token1 into token0 units at the window-average rate.
#[inline(always)]
pub fn convert_1_to_0(amount_in: u128, average1: U256) -> Result<u128> {
    mul_shift_q112(amount_in, average1)
}
