// Host-side tests for frame options.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}
mod error {
    include!("../src/error.rs");
}
mod config {
    include!("../src/config.rs");
}

use crate::config::*;
use crate::core::constants::*;
use crate::error::FrameError;

#[test]
fn defaults() {
    let o = FrameOptions::default();
    assert_eq!(o.field_of_view, DEFAULT_FOV_DEG);
    assert_eq!(o.width, None);
    assert_eq!(o.height, None);
    assert_eq!(o.source, None);
    assert_eq!(o.preload, None);
    assert!(!o.autoplay());
}

#[test]
fn explicit_size_wins() {
    let o = FrameOptions {
        width: Some(800),
        height: Some(400),
        ..Default::default()
    };
    assert_eq!(o.resolve_size((1024, 768)), Ok((800, 400)));
}

#[test]
fn layout_size_then_fallback() {
    let o = FrameOptions::default();
    assert_eq!(o.resolve_size((1024, 768)), Ok((1024, 768)));
    assert_eq!(o.resolve_size((0, 0)), Ok((FALLBACK_WIDTH, FALLBACK_HEIGHT)));
    let half = FrameOptions {
        width: Some(300),
        ..Default::default()
    };
    assert_eq!(half.resolve_size((0, 200)), Ok((300, 200)));
}

#[test]
fn explicit_zero_is_rejected() {
    let o = FrameOptions {
        width: Some(0),
        ..Default::default()
    };
    assert_eq!(
        o.resolve_size((0, 0)),
        Err(FrameError::InvalidSize {
            width: 0,
            height: FALLBACK_HEIGHT
        })
    );
}

fn normalized(fov: f32, source: Option<&str>) -> FrameOptions {
    let mut o = FrameOptions {
        field_of_view: fov,
        source: source.map(String::from),
        ..Default::default()
    };
    o.normalize();
    o
}

#[test]
fn field_of_view_never_fails_construction() {
    // Zero and garbage mean "use the default"
    assert_eq!(normalized(0.0, None).field_of_view, DEFAULT_FOV_DEG);
    assert_eq!(normalized(f32::NAN, None).field_of_view, DEFAULT_FOV_DEG);
    assert_eq!(normalized(f32::INFINITY, None).field_of_view, DEFAULT_FOV_DEG);
    // Out of range in either direction clamps
    assert_eq!(normalized(-10.0, None).field_of_view, FOV_MIN_DEG);
    assert_eq!(normalized(1.0, None).field_of_view, FOV_MIN_DEG);
    assert_eq!(normalized(500.0, None).field_of_view, FOV_MAX_DEG);
    assert_eq!(normalized(75.0, None).field_of_view, 75.0);
}

#[test]
fn blank_source_is_unset() {
    assert_eq!(normalized(40.0, Some("")).source, None);
    assert_eq!(normalized(40.0, Some("   ")).source, None);
    assert_eq!(
        normalized(40.0, Some("clip.mp4")).source.as_deref(),
        Some("clip.mp4")
    );
    let o = FrameOptions {
        autoplay: Some(true),
        ..Default::default()
    };
    assert!(o.autoplay());
}

#[test]
fn preload_values_pass_through_as_text() {
    assert_eq!(Scalar::Bool(true).into_text(), "true");
    assert_eq!(Scalar::Bool(false).into_text(), "false");
    assert_eq!(Scalar::Text("metadata".into()).into_text(), "metadata");
    assert_eq!(Scalar::Text("".into()).into_text(), "");
    assert_eq!(Scalar::Number(1.0).into_text(), "1");
    assert_eq!(Scalar::Number(0.5).into_text(), "0.5");
}

#[test]
fn parse_dimension_reads_leading_integer() {
    assert_eq!(parse_dimension("800"), Some(800));
    assert_eq!(parse_dimension("800px"), Some(800));
    assert_eq!(parse_dimension(" 640.5"), Some(640));
    assert_eq!(parse_dimension("auto"), None);
    assert_eq!(parse_dimension(""), None);
}

#[test]
fn error_messages_are_readable() {
    let e = FrameError::InvalidSize {
        width: 0,
        height: 360,
    };
    assert_eq!(e.to_string(), "invalid frame size 0x360");
    assert_eq!(
        FrameError::Gpu("No WebGPU adapter".into()).to_string(),
        "graphics initialisation failed: No WebGPU adapter"
    );
}
