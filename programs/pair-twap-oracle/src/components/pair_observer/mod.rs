pub mod converter;
pub mod fixed_point;
pub mod pair_accounts;
pub mod pair_constants;
pub mod sampler;

pub use converter::*;
pub use fixed_point::*;
pub use pair_accounts::*;
pub use pair_constants::*;
pub use sampler::*;

#[cfg(test)]
mod pair_observer_tests;
