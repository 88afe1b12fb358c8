//! Test harness for the pair observer: fixed-point arithmetic, the
//! extrapolating sampler, and amount conversion.
//!
//! - `helpers`: the in-memory `PriceIntegralSource` double and fixtures.
//! - `fixed_point_tests`: Q112.112 fraction and scaled-multiply behaviour.
//! - `sampler_tests`: counterfactual extrapolation and purity guarantees.
//! - `converter_tests`: amount conversion through committed averages.
//! - `property_tests`: proptest suites over the arithmetic seams.

pub mod converter_tests;
pub mod helpers;
