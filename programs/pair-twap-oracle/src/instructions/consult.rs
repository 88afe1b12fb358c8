//! Read-only queries: committed averages, conversions, and the live
//! extrapolated integral snapshot.
//!
//! None of these handlers mutate state or trigger recomputation; they read
//! the committed averages verbatim (or re-derive the pair snapshot) and
//! return the result as instruction return data.

use crate::components::pair_observer::{
    converter, read_pair, sampler::current_cumulative_prices,
};
use crate::error::OracleError;
use crate::instructions::initialize_oracle::amm_pair_program_id;
use crate::state::window_state::WindowState;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ConsultWindow<'info> {
    pub window_state: AccountLoader<'info, WindowState>,
}

#[derive(Accounts)]
pub struct ReadPairIntegrals<'info> {
    pub window_state: AccountLoader<'info, WindowState>,

    /// CHECK: must match the pair pinned in `window_state`; ownership is
    /// validated before any field is read. Never mutated.
    pub pair: AccountInfo<'info>,
}

/// Up-to-date price-integral snapshot, extrapolated to the current slot.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CurrentIntegrals {
    pub integral0: [u8; 32],
    pub integral1: [u8; 32],
    pub timestamp: u32,
}

/// Committed token0->token1 average, LE-encoded U256. Zero until the first
/// successful update; callers must treat zero as "uninitialized", never as
/// a price of zero.
pub fn price0(ctx: Context<ConsultWindow>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.window_state.load()?.average_0)
}

/// Committed token1->token0 average, same contract as `price0`.
pub fn price1(ctx: Context<ConsultWindow>) -> Result<[u8; 32]> {
    Ok(ctx.accounts.window_state.load()?.average_1)
}

pub fn convert_0_to_1(ctx: Context<ConsultWindow>, amount_in: u128) -> Result<u128> {
    let state = ctx.accounts.window_state.load()?;
    converter::convert_0_to_1(amount_in, state.price0())
}

pub fn convert_1_to_0(ctx: Context<ConsultWindow>, amount_in: u128) -> Result<u128> {
    let state = ctx.accounts.window_state.load()?;
    converter::convert_1_to_0(amount_in, state.price1())
}

/// Pure read+derive snapshot of the pair's integrals as of now. Calling it
/// twice in the same slot with unchanged reserves returns identical values.
pub fn current_integrals(ctx: Context<ReadPairIntegrals>) -> Result<CurrentIntegrals> {
    let now = Clock::get()?.unix_timestamp as u32;

    let state = ctx.accounts.window_state.load()?;

    require_keys_eq!(
        state.pair,
        ctx.accounts.pair.key(),
        OracleError::InvalidSource
    );

    let reader = read_pair(
        &ctx.accounts.pair,
        amm_pair_program_id(state.flags.is_mainnet()),
    )?;
    let sample = current_cumulative_prices(&reader, now)?;

    Ok(CurrentIntegrals {
        integral0: sample.integral0.to_le_bytes(),
        integral1: sample.integral1.to_le_bytes(),
        timestamp: sample.timestamp,
    })
}
