pub mod constants;
pub mod events;

pub use constants::*;
pub use events::*;
