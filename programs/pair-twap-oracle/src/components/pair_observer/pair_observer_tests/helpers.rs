//! Shared fixtures: an in-memory price-integral source standing in for the
//! on-chain pair account, so the sampler and window arithmetic run without
//! any account plumbing.

use crate::components::pair_observer::fixed_point::Q112_SHIFT;
use crate::components::pair_observer::pair_accounts::PriceIntegralSource;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Test double for the upstream pair: plain values, no validation beyond
/// what the trait contract demands.
#[derive(Clone, Copy, Debug)]
pub struct MemoryPairSource {
    pub reserve_0: u128,
    pub reserve_1: u128,
    pub last_sync_timestamp: u32,
    pub integral0: U256,
    pub integral1: U256,
}

impl PriceIntegralSource for MemoryPairSource {
    fn get_reserves(&self) -> Result<(u128, u128, u32)> {
        Ok((self.reserve_0, self.reserve_1, self.last_sync_timestamp))
    }

    fn price0_cumulative(&self) -> Result<U256> {
        Ok(self.integral0)
    }

    fn price1_cumulative(&self) -> Result<U256> {
        Ok(self.integral1)
    }
}

/// A source whose integrals are current as of `last_sync_timestamp`.
pub fn synced_source(reserve_0: u128, reserve_1: u128, last_sync_timestamp: u32) -> MemoryPairSource {
    MemoryPairSource {
        reserve_0,
        reserve_1,
        last_sync_timestamp,
        integral0: U256::ZERO,
        integral1: U256::ZERO,
    }
}

/// The Q112.112 encoding of the integer rate `n`.
pub fn q112(n: u128) -> U256 {
    U256::from(n) << Q112_SHIFT
}
