//! Authority-gated window reconfiguration.
//!
//! The new size affects only the next `update` call's elapsed test; an
//! already-committed average is never recomputed retroactively.

use crate::state::window_state::WindowState;
use crate::utils::events::WindowSizeChanged;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SetWindowSize<'info> {
    #[account(mut)]
    pub window_state: AccountLoader<'info, WindowState>,

    pub authority: Signer<'info>,
}

pub fn set_window_size(ctx: Context<SetWindowSize>, new_window_size: u32) -> Result<()> {
    let mut state = ctx.accounts.window_state.load_mut()?;

    // Authorization before validation: a non-owner learns nothing about
    // which sizes are acceptable.
    state.assert_authority(&ctx.accounts.authority.key())?;

    let previous_window_size = state.window_size;
    state.set_window_size(new_window_size)?;
    drop(state);

    emit!(WindowSizeChanged {
        window_state: ctx.accounts.window_state.key(),
        authority: ctx.accounts.authority.key(),
        previous_window_size,
        new_window_size,
    });

    msg!(
        "window size changed: {}s -> {}s",
        previous_window_size,
        new_window_size
    );

    Ok(())
}
