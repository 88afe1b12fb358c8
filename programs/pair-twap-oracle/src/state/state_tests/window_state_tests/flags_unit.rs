//! Unit coverage for the compact status bitfield.

use crate::state::window_state::WindowFlags;

#[test]
fn new_flags_are_empty() {
    let flags = WindowFlags::new();
    assert!(!flags.is_committed());
    assert!(!flags.is_mainnet());
    assert_eq!(flags.as_u32(), 0);
}

#[test]
fn set_and_clear_touch_only_the_named_bit() {
    let mut flags = WindowFlags::new();

    flags.set(WindowFlags::COMMITTED);
    assert!(flags.is_committed());
    assert!(!flags.is_mainnet(), "unrelated bits must stay clear");

    flags.set(WindowFlags::MAINNET);
    flags.clear(WindowFlags::COMMITTED);
    assert!(!flags.is_committed());
    assert!(flags.is_mainnet(), "clearing one bit must not disturb another");
}

#[test]
fn set_to_is_equivalent_to_set_or_clear() {
    let mut flags = WindowFlags::new();

    flags.set_to(WindowFlags::MAINNET, true);
    assert!(flags.is_mainnet());

    flags.set_to(WindowFlags::MAINNET, false);
    assert!(!flags.is_mainnet());
}

#[test]
fn truncating_constructor_masks_unknown_bits() {
    let flags = WindowFlags::from_u32_truncate(u32::MAX);
    assert_eq!(
        flags.as_u32() & !WindowFlags::VALID_MASK,
        0,
        "future bits must be dropped on read"
    );
    assert!(flags.is_committed());
    assert!(flags.is_mainnet());
}
