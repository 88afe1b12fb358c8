//! Deterministic fixtures for window accumulator tests.

use crate::components::pair_observer::sampler::IntegralSample;
use crate::state::window_state::{WindowFlags, WindowState};
use anchor_lang::prelude::Pubkey;
use ethnum::U256;

/// A freshly initialized accumulator: baseline at `last_timestamp`, averages
/// unset, mirroring the account right after `initialize_oracle`.
pub fn fresh_state(window_size: u32, last_timestamp: u32) -> WindowState {
    WindowState {
        authority: deterministic_key(1),
        pair: deterministic_key(2),
        last_integral_0: [0; 32],
        last_integral_1: [0; 32],
        average_0: [0; 32],
        average_1: [0; 32],
        update_count: 0,
        last_timestamp,
        window_size,
        flags: WindowFlags::new(),
        bump: 255,
        _padding: [0; 3],
        reserved: [0u64; 8],
    }
}

/// Stable, seed-derived key so failures reproduce byte-for-byte.
pub fn deterministic_key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn sample(integral0: U256, integral1: U256, timestamp: u32) -> IntegralSample {
    IntegralSample {
        integral0,
        integral1,
        timestamp,
    }
}

/// Byte snapshot for asserting that a rejected operation mutated nothing.
pub fn state_bytes(state: &WindowState) -> Vec<u8> {
    bytemuck::bytes_of(state).to_vec()
}
