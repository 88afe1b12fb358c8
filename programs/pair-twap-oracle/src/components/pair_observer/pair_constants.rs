use anchor_lang::prelude::*;

/// AMM pair program identifiers for account ownership validation.
///
/// # Network Separation Strategy
///
/// Separate constants for mainnet and devnet enable environment-specific
/// deployments while preventing accidental cross-network interactions. The
/// oracle validates pair-account ownership against these program IDs so it
/// only reads authentic pair state and cannot be fed a spoofed account that
/// mimics the pair layout.

/// Production AMM pair program deployment on Solana mainnet.
pub const AMM_PAIR_PROGRAM_ID_MAINNET: Pubkey =
    pubkey!("675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8");

/// Development AMM pair program deployment for testing and integration.
pub const AMM_PAIR_PROGRAM_ID_DEVNET: Pubkey =
    pubkey!("HWy1jotHpo6UqeQxx49dpYYdQB8wj9Qk9MdxwjLvDHB8");

/// Maximum reserve magnitude the pair program can report.
///
/// Reserves are u112 values carried in `u128` fields; the pair program
/// enforces this bound on every sync, so a value above it marks the account
/// as corrupt rather than merely large. Keeping reserves within 112 bits is
/// what lets `fraction` produce a Q112.112 ratio that always fits in 224
/// bits, which the sampler and converter arithmetic rely on.
pub const MAX_RESERVE: u128 = (1u128 << 112) - 1;
