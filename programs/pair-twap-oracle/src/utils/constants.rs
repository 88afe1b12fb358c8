/// State constants
pub const MAX_WINDOW_SIZE: u32 = 7 * 24 * 60 * 60; // one week; longer windows only serve stale data

/// PDA seed constants
pub const WINDOW_STATE_SEED: &[u8] = b"window_state";
