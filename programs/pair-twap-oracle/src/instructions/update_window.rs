//! Permissionless window update.
//!
//! Anyone may poke the oracle; the elapsed-time gate inside `commit_window`
//! is what makes the average manipulation-resistant, not the caller's
//! identity. Concurrent callers in the same slot are serialized by the
//! runtime: the first to commit advances `last_timestamp`, so the second
//! evaluates the window test against the fresh baseline and fails with
//! `WindowNotElapsed` instead of double-counting the window.

use crate::components::pair_observer::{read_pair, sampler::current_cumulative_prices};
use crate::error::OracleError;
use crate::instructions::initialize_oracle::amm_pair_program_id;
use crate::state::window_state::WindowState;
use crate::utils::constants::WINDOW_STATE_SEED;
use crate::utils::events::WindowUpdated;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateWindow<'info> {
    #[account(
        mut,
        seeds = [WINDOW_STATE_SEED, pair.key().as_ref()],
        bump = window_state.load()?.bump,
    )]
    pub window_state: AccountLoader<'info, WindowState>,

    /// CHECK: must match the pair pinned in `window_state` (enforced by the
    /// PDA seeds and re-checked in the handler); ownership is validated
    /// before any field is read.
    pub pair: AccountInfo<'info>,
}

pub fn update_window(ctx: Context<UpdateWindow>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp as u32;

    let mut state = ctx.accounts.window_state.load_mut()?;

    require_keys_eq!(
        state.pair,
        ctx.accounts.pair.key(),
        OracleError::InvalidSource
    );

    let sample = {
        let reader = read_pair(
            &ctx.accounts.pair,
            amm_pair_program_id(state.flags.is_mainnet()),
        )?;
        current_cumulative_prices(&reader, now)?
    };

    let elapsed = sample.timestamp.wrapping_sub(state.last_timestamp);
    let (average0, average1) = state.commit_window(&sample)?;
    let update_count = state.update_count;
    drop(state);

    emit!(WindowUpdated {
        window_state: ctx.accounts.window_state.key(),
        average_0: average0.to_le_bytes(),
        average_1: average1.to_le_bytes(),
        elapsed,
        timestamp: now,
        update_count,
    });

    msg!("window committed: elapsed={}s updates={}", elapsed, update_count);

    Ok(())
}
