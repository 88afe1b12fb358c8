//! Fixed-window TWAP oracle over an AMM pair's cumulative price integrals.
//!
//! The pair program maintains two 256-bit accumulators that integrate the
//! spot reserve ratio over time. This program periodically differences two
//! samples of those integrals separated by a configured minimum window and
//! commits the result as a Q112.112 average rate, which is manipulation
//! resistant at the cost of lagging spot by up to one window.

#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod components;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("6SULGPYhMcP4kQ7P2pg9fu8qpVZJMLDDjNu9NLCyoria");

#[program]
pub mod pair_twap_oracle {
    use super::*;

    /// Create the per-pair window accumulator and take the baseline sample.
    pub fn initialize_oracle(ctx: Context<InitializeOracle>, config: OracleConfig) -> Result<()> {
        instructions::initialize_oracle::initialize_oracle(ctx, config)
    }

    /// Close the current window and commit fresh averages. Permissionless;
    /// fails with `WindowNotElapsed` until the window has passed.
    pub fn update(ctx: Context<UpdateWindow>) -> Result<()> {
        instructions::update_window::update_window(ctx)
    }

    /// Reconfigure the minimum window. Authority only.
    pub fn set_window_size(ctx: Context<SetWindowSize>, new_window_size: u32) -> Result<()> {
        instructions::set_window_size::set_window_size(ctx, new_window_size)
    }

    /// Committed token0->token1 average (Q112.112, LE bytes). Never fails.
    pub fn price0(ctx: Context<ConsultWindow>) -> Result<[u8; 32]> {
        instructions::consult::price0(ctx)
    }

    /// Committed token1->token0 average (Q112.112, LE bytes). Never fails.
    pub fn price1(ctx: Context<ConsultWindow>) -> Result<[u8; 32]> {
        instructions::consult::price1(ctx)
    }

    /// Convert a token0 amount through the committed average.
    pub fn convert_0_to_1(ctx: Context<ConsultWindow>, amount_in: u128) -> Result<u128> {
        instructions::consult::convert_0_to_1(ctx, amount_in)
    }

    /// Convert a token1 amount through the committed average.
    pub fn convert_1_to_0(ctx: Context<ConsultWindow>, amount_in: u128) -> Result<u128> {
        instructions::consult::convert_1_to_0(ctx, amount_in)
    }

    /// Read the pair's integrals extrapolated to the current slot.
    pub fn current_integrals(ctx: Context<ReadPairIntegrals>) -> Result<CurrentIntegrals> {
        instructions::consult::current_integrals(ctx)
    }
}
