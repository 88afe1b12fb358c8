pub mod pair_observer;

pub use pair_observer::*;
