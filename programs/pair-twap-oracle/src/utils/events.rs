//! Program events emitted at state transitions. 256-bit fields are carried
//! as little-endian byte arrays, the same encoding the account stores, so
//! indexers decode one format everywhere.

use anchor_lang::prelude::*;

#[event]
pub struct OracleInitialized {
    pub window_state: Pubkey,
    pub pair: Pubkey,
    pub authority: Pubkey,
    pub window_size: u32,
    pub baseline_integral_0: [u8; 32],
    pub baseline_integral_1: [u8; 32],
    pub timestamp: u32,
}

#[event]
pub struct WindowUpdated {
    pub window_state: Pubkey,
    pub average_0: [u8; 32],
    pub average_1: [u8; 32],
    pub elapsed: u32,
    pub timestamp: u32,
    pub update_count: u64,
}

#[event]
pub struct WindowSizeChanged {
    pub window_state: Pubkey,
    pub authority: Pubkey,
    pub previous_window_size: u32,
    pub new_window_size: u32,
}
