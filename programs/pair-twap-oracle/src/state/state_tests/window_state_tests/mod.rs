pub mod flags_unit;
pub mod helpers;
pub mod layout_zero_copy;
