//! Zero-copy access to the upstream AMM pair account.
//!
//! # Compatibility Constraint
//!
//! `PairState` MUST stay byte-for-byte compatible with the pair program's
//! account layout; the oracle reads the foreign account directly instead of
//! deserializing it. The packed representation prevents the compiler from
//! inserting padding that would shift field offsets.
//!
//! # Read-Only Contract
//!
//! The oracle never mutates pair state. Every read goes through `PairReader`,
//! which keeps the account data borrow alive for the reader's lifetime and
//! funnels all unaligned pointer access through safe accessor methods.

use crate::components::pair_observer::pair_constants::MAX_RESERVE;
use crate::error::PairObserverError;
use anchor_lang::prelude::*;
use core::mem::size_of;
use core::ptr;
use ethnum::U256;

/// Read-only capability the sampler needs from a price-integral source.
///
/// The on-chain `PairReader` is the production implementation; tests supply
/// an in-memory one. Keeping the sampler behind this seam means the window
/// arithmetic is exercised without any account plumbing.
pub trait PriceIntegralSource {
    /// Spot reserves plus the timestamp of the source's last internal sync.
    fn get_reserves(&self) -> Result<(u128, u128, u32)>;

    /// Running integral of (reserve1 / reserve0) in Q112.112-seconds,
    /// wrapping modulo 2^256 by the pair program's design.
    fn price0_cumulative(&self) -> Result<U256>;

    /// Running integral of (reserve0 / reserve1), same convention.
    fn price1_cumulative(&self) -> Result<U256>;
}

/// Prefix fields of the pair account that precede the ones we read:
/// token_mint_0(32) + token_mint_1(32) + token_vault_0(32) + token_vault_1(32).
const PAIR_STATE_PREFIX_SIZE: usize = 32 + 32 + 32 + 32;

/// Partial view of the pair program's account, fields we consume only.
///
/// Trailing fields the pair program appends later do not affect this layout,
/// so the struct is resilient to additive upstream changes.
#[repr(C, packed)]
pub struct PairState {
    /// Mint and vault keys we skip over to reach the pricing fields.
    pub _prefix: [u8; PAIR_STATE_PREFIX_SIZE],

    /// Token balances backing the pair. u112-range values carried in u128.
    pub reserve_0: u128,
    pub reserve_1: u128,

    /// Timestamp (mod 2^32) of the pair's last reserve sync. The reported
    /// integrals are current exactly up to this instant.
    pub last_sync_timestamp: u32,

    /// Cumulative price integrals, little-endian 256-bit accumulators.
    /// Monotonically non-decreasing modulo 2^256; wraparound is deliberate.
    pub price_0_cumulative: [u8; 32],
    pub price_1_cumulative: [u8; 32],

    /// Reserved space mirroring the pair program's own padding.
    pub _padding: [u64; 4],
}

/// Safe reader wrapper over a borrowed pair account.
///
/// Holds the account data `Ref` so the pointer stays valid for the reader's
/// lifetime; all field access uses `read_unaligned` because the packed
/// layout gives no alignment guarantees.
pub struct PairReader<'a> {
    /// Borrowed reference keeping account data alive for reader lifetime.
    _data_ref: std::cell::Ref<'a, &'a mut [u8]>,

    /// Typed pointer into the account data past the discriminator.
    data: *const PairState,
}

impl<'a> PairReader<'a> {
    /// Construct a reader after validating the account is large enough for
    /// the discriminator plus every field we dereference.
    #[inline]
    pub fn new_ptr(account_info: &'a AccountInfo) -> Result<Self> {
        let data = account_info.try_borrow_data()?;

        require!(
            data.len() >= 8 + size_of::<PairState>(),
            PairObserverError::TooSmall
        );

        // Skip the 8-byte Anchor discriminator.
        let ptr = unsafe { data.as_ptr().add(8) as *const PairState };

        Ok(Self {
            _data_ref: data,
            data: ptr,
        })
    }

    #[inline]
    pub fn reserve_0(&self) -> u128 {
        unsafe { ptr::read_unaligned(ptr::addr_of!((*self.data).reserve_0)) }
    }

    #[inline]
    pub fn reserve_1(&self) -> u128 {
        unsafe { ptr::read_unaligned(ptr::addr_of!((*self.data).reserve_1)) }
    }

    #[inline]
    pub fn last_sync_timestamp(&self) -> u32 {
        unsafe { ptr::read_unaligned(ptr::addr_of!((*self.data).last_sync_timestamp)) }
    }

    #[inline]
    pub fn price_0_cumulative(&self) -> U256 {
        let bytes = unsafe { ptr::read_unaligned(ptr::addr_of!((*self.data).price_0_cumulative)) };
        U256::from_le_bytes(bytes)
    }

    #[inline]
    pub fn price_1_cumulative(&self) -> U256 {
        let bytes = unsafe { ptr::read_unaligned(ptr::addr_of!((*self.data).price_1_cumulative)) };
        U256::from_le_bytes(bytes)
    }
}

impl PriceIntegralSource for PairReader<'_> {
    fn get_reserves(&self) -> Result<(u128, u128, u32)> {
        let reserve_0 = self.reserve_0();
        let reserve_1 = self.reserve_1();

        // Reserves above the u112 bound mean the account is not pair state;
        // treat it as a layout mismatch rather than a price of that size.
        require!(
            reserve_0 <= MAX_RESERVE && reserve_1 <= MAX_RESERVE,
            PairObserverError::InvalidOwner
        );

        Ok((reserve_0, reserve_1, self.last_sync_timestamp()))
    }

    fn price0_cumulative(&self) -> Result<U256> {
        Ok(self.price_0_cumulative())
    }

    fn price1_cumulative(&self) -> Result<U256> {
        Ok(self.price_1_cumulative())
    }
}

/// Create a validated `PairReader` with ownership verification.
///
/// Ownership is checked before any field access so a hostile account that
/// merely copies the pair layout cannot feed the oracle fabricated integrals.
#[inline]
pub fn read_pair<'a>(account_info: &'a AccountInfo, program_id: &Pubkey) -> Result<PairReader<'a>> {
    require_keys_eq!(
        *account_info.owner,
        *program_id,
        PairObserverError::InvalidOwner
    );
    PairReader::new_ptr(account_info)
}
