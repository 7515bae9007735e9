// Host-side tests for load-progress math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod progress {
    include!("../src/core/progress.rs");
}

use progress::*;

#[test]
fn buffered_uses_last_range_end() {
    assert_eq!(buffered_fraction(Some(5.0), Some(10.0), None), Some(0.5));
    assert_eq!(buffered_fraction(Some(0.0), Some(10.0), None), Some(0.0));
}

#[test]
fn buffered_is_clamped() {
    assert_eq!(buffered_fraction(Some(12.0), Some(10.0), None), Some(1.0));
}

#[test]
fn buffered_falls_back_to_bytes() {
    assert_eq!(buffered_fraction(None, Some(10.0), Some((50.0, 200.0))), Some(0.25));
    assert_eq!(
        buffered_fraction(Some(3.0), Some(f64::NAN), Some((50.0, 200.0))),
        Some(0.25)
    );
    assert_eq!(
        buffered_fraction(Some(3.0), Some(f64::INFINITY), Some((300.0, 200.0))),
        Some(1.0)
    );
}

#[test]
fn buffered_unknown_without_usable_inputs() {
    assert_eq!(buffered_fraction(None, None, None), None);
    assert_eq!(buffered_fraction(Some(4.0), Some(0.0), None), None);
    assert_eq!(buffered_fraction(Some(4.0), Some(f64::NAN), None), None);
    assert_eq!(buffered_fraction(None, Some(10.0), Some((10.0, 0.0))), None);
    assert_eq!(buffered_fraction(Some(f64::NAN), Some(10.0), None), None);
}

#[test]
fn played_fraction_over_duration() {
    assert_eq!(played_fraction(3.0, Some(12.0)), Some(0.25));
    assert_eq!(played_fraction(12.0, Some(12.0)), Some(1.0));
    assert_eq!(played_fraction(0.0, Some(12.0)), Some(0.0));
}

#[test]
fn played_fraction_unknown_duration() {
    assert_eq!(played_fraction(3.0, None), None);
    assert_eq!(played_fraction(3.0, Some(f64::NAN)), None);
    assert_eq!(played_fraction(3.0, Some(f64::INFINITY)), None);
    assert_eq!(played_fraction(3.0, Some(0.0)), None);
    assert_eq!(played_fraction(f64::NAN, Some(10.0)), None);
}
