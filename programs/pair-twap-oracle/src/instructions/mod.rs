pub mod consult;
pub mod initialize_oracle;
pub mod set_window_size;
pub mod update_window;

pub use consult::*;
pub use initialize_oracle::*;
pub use set_window_size::*;
pub use update_window::*;
