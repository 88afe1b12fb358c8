pub mod window_state;

pub use window_state::*;

#[cfg(test)]
pub mod state_tests;
