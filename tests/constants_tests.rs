// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn navigation_limits_are_consistent() {
    // Latitude stops short of the poles and is symmetric
    assert!(LAT_MAX_DEG < 90.0);
    assert_eq!(LAT_MIN_DEG, -LAT_MAX_DEG);

    // Default zoom is reachable
    assert!(FOV_MIN_DEG > 0.0);
    assert!(FOV_MIN_DEG < DEFAULT_FOV_DEG && DEFAULT_FOV_DEG < FOV_MAX_DEG);
    assert!(FOV_MAX_DEG < 180.0);

    // Scrolling down narrows the view
    assert!(WHEEL_VELOCITY < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sphere_fits_the_clip_range() {
    // The eye sits on the far side of the sphere, one diameter from the target.
    assert!(CAMERA_NEAR > 0.0);
    assert!(2.0 * SPHERE_RADIUS <= CAMERA_FAR);
    assert!(SPHERE_WIDTH_SEGMENTS >= 3);
    assert!(SPHERE_HEIGHT_SEGMENTS >= 2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn refresh_interval_caps_near_thirty_fps() {
    let fps = 1000.0 / TEXTURE_REFRESH_INTERVAL_MS;
    assert!(fps > 29.0 && fps < 32.0);
    assert!(FALLBACK_WIDTH > 0 && FALLBACK_HEIGHT > 0);
}

#[test]
fn clear_colour_is_linear_333333() {
    let expected = srgb_to_linear(0x33 as f64 / 255.0);
    for c in CLEAR_RGB_LINEAR {
        assert!((c - expected).abs() < 1e-3, "{c} vs {expected}");
    }
}
