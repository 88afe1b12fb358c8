use crate::components::pair_observer::sampler::IntegralSample;
use crate::error::OracleError;
use crate::utils::constants::MAX_WINDOW_SIZE;
use anchor_lang::prelude::*;
use bytemuck::{Pod, Zeroable};
use ethnum::U256;

/// Persistent accumulator state for the fixed-window TWAP.
///
/// # State Machine
///
/// The account alternates between two implicit states on every `update`:
/// awaiting-window (elapsed since `last_timestamp` is below `window_size`,
/// updates are rejected without mutation) and ready (a full window has
/// closed, the averages are recomputed and the sample committed). After a
/// commit the account is immediately awaiting the next window.
///
/// # Storage Encoding
///
/// The 256-bit integrals and averages are stored as little-endian byte
/// arrays so the account stays `Pod` for zero-copy access; `ethnum::U256`
/// is reconstructed at the accessor boundary. `average_0`/`average_1` are
/// Q112.112 average rates over the most recently closed window, zero until
/// the first successful commit - consumers must treat zero as "no average
/// yet", never as a price of zero.
#[account(zero_copy)]
#[derive(InitSpace)]
#[repr(C)]
pub struct WindowState {
    /// Sole identity allowed to reconfigure the window size.
    pub authority: Pubkey,

    /// The AMM pair account this oracle samples. Pinned at initialization;
    /// every update re-validates the passed account against this key.
    pub pair: Pubkey,

    /// Price integrals of the last accepted sample, LE-encoded U256.
    /// Wrap modulo 2^256 together with the pair's own accumulators.
    pub last_integral_0: [u8; 32],
    pub last_integral_1: [u8; 32],

    /// Committed Q112.112 window averages, LE-encoded U256.
    pub average_0: [u8; 32],
    pub average_1: [u8; 32],

    /// Number of successful commits, for operational visibility.
    pub update_count: u64,

    /// Timestamp (mod 2^32) of the last accepted sample. Strictly advances
    /// (modulo wraparound) on every successful commit.
    pub last_timestamp: u32,

    /// Minimum elapsed seconds between accepted samples. Always positive;
    /// read fresh on every update, never cached by callers.
    pub window_size: u32,

    /// Compact status bitfield, see `WindowFlags`.
    pub flags: WindowFlags,

    /// PDA bump seed, cached to avoid re-derivation.
    pub bump: u8,

    /// Explicit padding keeps the layout deterministic across targets.
    pub _padding: [u8; 3],

    /// Reserved for future fields without a layout break.
    pub reserved: [u64; 8],
}

impl WindowState {
    /// Committed average rate for converting token0 amounts into token1.
    /// Never fails and never recomputes; zero before the first commit.
    #[inline(always)]
    pub fn price0(&self) -> U256 {
        U256::from_le_bytes(self.average_0)
    }

    /// Committed average rate for converting token1 amounts into token0.
    #[inline(always)]
    pub fn price1(&self) -> U256 {
        U256::from_le_bytes(self.average_1)
    }

    #[inline(always)]
    pub fn last_integral0(&self) -> U256 {
        U256::from_le_bytes(self.last_integral_0)
    }

    #[inline(always)]
    pub fn last_integral1(&self) -> U256 {
        U256::from_le_bytes(self.last_integral_1)
    }

    /// Seed the accumulator with its first sample.
    ///
    /// Establishes a zero-length baseline window: averages stay unset and
    /// the first real commit can only happen once a full window has elapsed
    /// past this sample's timestamp.
    pub fn record_baseline(&mut self, sample: &IntegralSample) {
        self.last_integral_0 = sample.integral0.to_le_bytes();
        self.last_integral_1 = sample.integral1.to_le_bytes();
        self.last_timestamp = sample.timestamp;
    }

    /// Close the current window against `sample` and commit new averages.
    ///
    /// Fails with `WindowNotElapsed` - mutating nothing - while the elapsed
    /// time since the last accepted sample is shorter than `window_size`.
    /// On success both averages are recomputed from the integral deltas,
    /// the sample becomes the new baseline, and the committed pair is
    /// returned for event emission.
    ///
    /// # Wraparound Arithmetic
    ///
    /// Elapsed time uses modular u32 subtraction and the integral deltas use
    /// modular U256 subtraction. Both accumulators wrap at the same modulus
    /// as the upstream pair, so an unsigned difference across at most one
    /// wraparound is the mathematically correct delta even when the raw
    /// values "decreased"; the subtraction itself is allowed to wrap.
    pub fn commit_window(&mut self, sample: &IntegralSample) -> Result<(U256, U256)> {
        let elapsed = sample.timestamp.wrapping_sub(self.last_timestamp);

        require!(elapsed >= self.window_size, OracleError::WindowNotElapsed);

        // window_size is validated positive at both write sites, so elapsed
        // is nonzero here and the divisions below cannot trap. It also means
        // a committed average can never reflect a zero-length window.
        let elapsed_wide = U256::from(elapsed);
        let average0 = sample.integral0.wrapping_sub(self.last_integral0()) / elapsed_wide;
        let average1 = sample.integral1.wrapping_sub(self.last_integral1()) / elapsed_wide;

        // Both averages computed before any field is written: the commit is
        // all-or-nothing even without an explicit transaction object.
        self.average_0 = average0.to_le_bytes();
        self.average_1 = average1.to_le_bytes();
        self.last_integral_0 = sample.integral0.to_le_bytes();
        self.last_integral_1 = sample.integral1.to_le_bytes();
        self.last_timestamp = sample.timestamp;
        self.flags.set(WindowFlags::COMMITTED);
        self.update_count = self.update_count.saturating_add(1);

        Ok((average0, average1))
    }

    /// Reconfigure the minimum window. Takes effect on the next `update`
    /// call's elapsed test, never retroactively.
    pub fn set_window_size(&mut self, new_window_size: u32) -> Result<()> {
        validate_window_size(new_window_size)?;
        self.window_size = new_window_size;
        Ok(())
    }

    /// Authorization seam for configuration changes, decoupled from the
    /// averaging logic so the window arithmetic stays permissionless.
    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, OracleError::Unauthorized);
        Ok(())
    }
}

/// Shared validation for construction and reconfiguration. A zero window
/// would let a single sample close a window of zero elapsed time, dividing
/// by zero and defeating the manipulation resistance entirely.
#[inline(always)]
pub fn validate_window_size(window_size: u32) -> Result<()> {
    require!(
        window_size > 0 && window_size <= MAX_WINDOW_SIZE,
        OracleError::InvalidWindowSize
    );
    Ok(())
}

/// Compact status bitfield for `WindowState` with zero-copy compatibility.
///
/// The transparent u32 wrapper keeps the account `Pod` while giving flag
/// access a typed API instead of raw mask arithmetic.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Pod, Zeroable, Default, AnchorDeserialize, AnchorSerialize,
    InitSpace,
)]
#[repr(transparent)]
pub struct WindowFlags(u32);

impl WindowFlags {
    /// Set once the first window has been successfully committed. Lets
    /// off-chain consumers distinguish "no average yet" from a genuinely
    /// zero average without changing the zero-until-first-update contract.
    pub const COMMITTED: Self = Self(0b0000_0001);

    /// The oracle reads the mainnet pair program rather than the devnet one.
    /// Pinned at initialization so every later read validates ownership
    /// against the same deployment.
    pub const MAINNET: Self = Self(0b0000_0010);

    /// Validation mask over all currently recognized bits.
    /// Used for forward-compatible reads that drop unknown future bits.
    pub const VALID_MASK: u32 = Self::COMMITTED.0 | Self::MAINNET.0;

    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, flag: Self) {
        self.0 |= flag.0;
    }

    #[inline(always)]
    pub fn clear(&mut self, flag: Self) {
        self.0 &= !flag.0;
    }

    #[inline(always)]
    pub fn set_to(&mut self, flag: Self, on: bool) {
        if on {
            self.set(flag)
        } else {
            self.clear(flag)
        }
    }

    #[inline(always)]
    pub fn is_committed(self) -> bool {
        self.has(Self::COMMITTED)
    }

    #[inline(always)]
    pub fn is_mainnet(self) -> bool {
        self.has(Self::MAINNET)
    }

    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn from_u32_truncate(value: u32) -> Self {
        // lenient: drop unknown bits for forward-compat reads
        Self(value & Self::VALID_MASK)
    }
}
