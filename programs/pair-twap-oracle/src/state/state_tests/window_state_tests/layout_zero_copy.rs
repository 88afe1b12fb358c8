//! Byte-level ABI guarantees for the zero-copy account.
//!
//! The account is read in place from the runtime's backing slice, so its
//! size and field layout are a wire format: any drift breaks deployed
//! accounts. These tests pin the layout a deployment depends on.

use super::helpers::fresh_state;
use crate::state::window_state::WindowState;
use core::mem::{align_of, size_of};

/// authority(32) + pair(32) + integrals(64) + averages(64) + update_count(8)
/// + last_timestamp(4) + window_size(4) + flags(4) + bump(1) + padding(3)
/// + reserved(64).
const EXPECTED_SIZE: usize = 280;

#[test]
fn window_state_size_is_pinned() {
    assert_eq!(
        size_of::<WindowState>(),
        EXPECTED_SIZE,
        "layout drift would corrupt deployed accounts"
    );
}

#[test]
fn window_state_alignment_allows_in_place_reads() {
    assert_eq!(
        align_of::<WindowState>(),
        8,
        "alignment is fixed by the u64 fields"
    );
    assert_eq!(
        EXPECTED_SIZE % align_of::<WindowState>(),
        0,
        "size must stay a multiple of the alignment for array packing"
    );
}

#[test]
fn pod_round_trip_preserves_every_field() {
    let mut state = fresh_state(3_600, 42);
    state.update_count = 7;
    state.last_integral_0[31] = 0xAB;
    state.average_1[0] = 0xCD;

    let bytes = bytemuck::bytes_of(&state).to_vec();
    let back: &WindowState = bytemuck::from_bytes(&bytes);

    assert_eq!(bytemuck::bytes_of(back), bytes.as_slice());
    assert_eq!(back.window_size, 3_600);
    assert_eq!(back.update_count, 7);
    assert_eq!(back.last_integral_0[31], 0xAB);
    assert_eq!(back.average_1[0], 0xCD);
}

#[test]
fn zeroed_account_reads_as_uninitialized() {
    let state: WindowState = bytemuck::Zeroable::zeroed();

    assert_eq!(state.price0(), ethnum::U256::ZERO);
    assert_eq!(state.price1(), ethnum::U256::ZERO);
    assert!(!state.flags.is_committed());
    assert_eq!(state.update_count, 0);
}
