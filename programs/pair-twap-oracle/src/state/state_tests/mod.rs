//! Test harness for the window accumulator account.
//!
//! Organised into focused modules so reviewers can reason about coverage:
//! - `helpers`: deterministic fixtures shared across suites.
//! - `core_unit_tests`: the update state machine and configuration gates.
//! - `wraparound_tests`: timestamp and integral wraparound behaviour.
//! - `flags_unit`: the compact status bitfield.
//! - `layout_zero_copy`: byte-level ABI and zero-copy guarantees.
//! - `property_tests`: proptest-based exploration of commit invariants.

pub mod window_state_tests;
