//! One-time oracle construction.
//!
//! # Initialization Strategy
//!
//! All validation runs before any account field is written, so construction
//! either fully succeeds or leaves nothing behind. The instruction takes the
//! baseline sample from the pair at this instant, establishing a zero-length
//! window: no average exists until a full window has elapsed past this
//! sample and `update` commits it.

use crate::components::pair_observer::{
    pair_constants::{AMM_PAIR_PROGRAM_ID_DEVNET, AMM_PAIR_PROGRAM_ID_MAINNET},
    read_pair,
    sampler::current_cumulative_prices,
};
use crate::error::OracleError;
use crate::state::window_state::{validate_window_size, WindowFlags, WindowState};
use crate::utils::constants::WINDOW_STATE_SEED;
use crate::utils::events::OracleInitialized;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct OracleConfig {
    /// Minimum elapsed seconds between accepted samples. Longer windows give
    /// better manipulation resistance at the cost of a staler average.
    pub window_size: u32,

    /// Network flag selecting which pair program deployment to trust.
    pub use_mainnet: bool,
}

/// Select the pair program deployment this oracle validates ownership against.
#[inline(always)]
pub fn amm_pair_program_id(mainnet: bool) -> &'static Pubkey {
    if mainnet {
        &AMM_PAIR_PROGRAM_ID_MAINNET
    } else {
        &AMM_PAIR_PROGRAM_ID_DEVNET
    }
}

#[derive(Accounts)]
#[instruction(config: OracleConfig)]
pub struct InitializeOracle<'info> {
    /// Accumulator state, one PDA per observed pair. Deriving the seed from
    /// the pair key pins the oracle to a single source for its lifetime and
    /// makes the oracle address discoverable from the pair alone.
    #[account(
        init,
        payer = authority,
        space = 8 + WindowState::INIT_SPACE,
        seeds = [WINDOW_STATE_SEED, pair.key().as_ref()],
        bump,
    )]
    pub window_state: AccountLoader<'info, WindowState>,

    /// CHECK: foreign AMM pair account; ownership and layout are validated
    /// in the handler before any field of it is read.
    pub pair: AccountInfo<'info>,

    /// Becomes the sole authority allowed to reconfigure the window size.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_oracle(ctx: Context<InitializeOracle>, config: OracleConfig) -> Result<()> {
    // Truncation to u32 is the mod-2^32 timestamp convention used throughout.
    let now = Clock::get()?.unix_timestamp as u32;

    validate_window_size(config.window_size)?;

    require!(
        ctx.accounts.pair.key() != Pubkey::default(),
        OracleError::InvalidSource
    );

    // Any ownership or layout failure means this account cannot serve as a
    // price-integral source; surface it uniformly as a construction error.
    let baseline = {
        let reader = read_pair(&ctx.accounts.pair, amm_pair_program_id(config.use_mainnet))
            .map_err(|_| error!(OracleError::InvalidSource))?;
        current_cumulative_prices(&reader, now)?
    };

    let mut state = ctx.accounts.window_state.load_init()?;
    state.authority = ctx.accounts.authority.key();
    state.pair = ctx.accounts.pair.key();
    state.window_size = config.window_size;
    state.flags = WindowFlags::new();
    state.flags.set_to(WindowFlags::MAINNET, config.use_mainnet);
    state.bump = ctx.bumps.window_state;
    state.record_baseline(&baseline);
    drop(state);

    emit!(OracleInitialized {
        window_state: ctx.accounts.window_state.key(),
        pair: ctx.accounts.pair.key(),
        authority: ctx.accounts.authority.key(),
        window_size: config.window_size,
        baseline_integral_0: baseline.integral0.to_le_bytes(),
        baseline_integral_1: baseline.integral1.to_le_bytes(),
        timestamp: now,
    });

    msg!(
        "window oracle initialized: pair={} window={}s",
        ctx.accounts.pair.key(),
        config.window_size
    );

    Ok(())
}
