//! Q112.112 fixed-point arithmetic for price ratios and unit conversion.
//!
//! # Fixed-Point Design Rationale
//!
//! Prices are ratios of two u112-range reserves. Encoding them as unsigned
//! integers scaled by 2^112 ("Q112.112") keeps the full ratio range
//! representable in 224 bits: the largest ratio (max reserve over a reserve
//! of one) still fits, and the smallest nonzero ratio keeps 112 fractional
//! bits of precision. All intermediates run in `ethnum::U256` so no realistic
//! operand combination can overflow silently.

use crate::error::PairObserverError;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Number of fractional bits in the Q112.112 encoding.
pub const Q112_SHIFT: u32 = 112;

/// The Q112.112 encoding of the rate 1.0.
pub const Q112_ONE: U256 = U256::from_words(0, 1u128 << Q112_SHIFT);

/// Encode the ratio `numerator / denominator` as a Q112.112 value.
///
/// Truncates (floors) on inexact division. This is an accepted, bounded
/// source of error of at most 2^-112 per sample, not a bug; callers that
/// integrate the ratio over time inherit the same bound per second.
///
/// Inputs are reserves in the u112 range, so the shifted numerator occupies
/// at most 224 bits and the division cannot overflow.
#[inline(always)]
pub fn fraction(numerator: u128, denominator: u128) -> Result<U256> {
    // A zero reserve means the pair holds none of one token: no price exists.
    require!(denominator != 0, PairObserverError::DivisionByZero);

    Ok((U256::from(numerator) << Q112_SHIFT) / U256::from(denominator))
}

/// Convert `amount` through a Q112.112 `scaled_rate`: `(amount * rate) >> 112`.
///
/// # Overflow Safety Strategy
///
/// The intermediate product of a u128 amount and a 224-bit rate can exceed
/// 256 bits, so the multiply is checked rather than wrapping; a pathological
/// amount fails with `Overflow` instead of silently truncating value. The
/// shifted result must also fit back into u128 for the same reason.
#[inline(always)]
pub fn mul_shift_q112(amount: u128, scaled_rate: U256) -> Result<u128> {
    let product = U256::from(amount)
        .checked_mul(scaled_rate)
        .ok_or(PairObserverError::Overflow)?;

    let shifted: U256 = product >> Q112_SHIFT;

    if shifted > U256::from(u128::MAX) {
        return Err(PairObserverError::Overflow.into());
    }

    Ok(shifted.as_u128())
}
