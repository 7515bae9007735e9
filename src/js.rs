// Conversions between JavaScript values and the frame's Rust types.

use crate::config::{parse_dimension, FrameOptions, Scalar};
use crate::core::{FrameEvent, ViewportState};
use crate::error::FrameError;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn first(obj: &JsValue, keys: &[&str]) -> Option<JsValue> {
    keys.iter().find_map(|k| get(obj, k))
}

fn dimension(value: JsValue, name: &str) -> Result<u32, FrameError> {
    let parsed = match value.as_f64() {
        Some(n) if n.is_finite() && n >= 0.0 => Some(n as u32),
        Some(_) => None,
        None => value.as_string().as_deref().and_then(parse_dimension),
    };
    parsed.ok_or_else(|| FrameError::InvalidOption(format!("{name} must be a size, got {value:?}")))
}

/// Read `FrameOptions` from a plain JS object. `undefined`/`null` give the defaults.
pub fn frame_options(value: &JsValue) -> Result<FrameOptions, FrameError> {
    let mut opts = FrameOptions::default();
    if value.is_undefined() || value.is_null() {
        return Ok(opts);
    }
    if !value.is_object() {
        return Err(FrameError::InvalidOption("options must be an object".into()));
    }

    if let Some(w) = get(value, "width") {
        opts.width = Some(dimension(w, "width")?);
    }
    if let Some(h) = get(value, "height") {
        opts.height = Some(dimension(h, "height")?);
    }
    if let Some(fov) = first(value, &["fieldOfView", "fov"]) {
        opts.field_of_view = fov
            .as_f64()
            .or_else(|| fov.as_string().and_then(|s| s.trim().parse().ok()))
            .map(|v| v as f32)
            .unwrap_or(f32::NAN);
    }
    if let Some(src) = first(value, &["src", "source"]) {
        opts.source = Some(
            src.as_string()
                .ok_or_else(|| FrameError::InvalidOption("src must be a string".into()))?,
        );
    }
    if let Some(preload) = get(value, "preload") {
        let scalar = if let Some(b) = preload.as_bool() {
            Scalar::Bool(b)
        } else if let Some(n) = preload.as_f64() {
            Scalar::Number(n)
        } else {
            Scalar::Text(preload.as_string().unwrap_or_default())
        };
        opts.preload = Some(scalar.into_text());
    }
    if let Some(autoplay) = get(value, "autoplay") {
        opts.autoplay = Some(autoplay.is_truthy());
    }

    opts.normalize();
    Ok(opts)
}

fn set(obj: &Object, key: &str, value: impl Into<JsValue>) {
    _ = Reflect::set(obj, &JsValue::from_str(key), &value.into());
}

/// Plain-object snapshot of the viewport record.
pub fn state_object(state: &ViewportState) -> JsValue {
    let obj = Object::new();
    set(&obj, "percentLoaded", state.percent_loaded);
    set(&obj, "timestamp", state.timestamp);
    let drag_start = match state.drag_start {
        Some(anchor) => {
            let a = Object::new();
            set(&a, "x", anchor.x);
            set(&a, "y", anchor.y);
            JsValue::from(a)
        }
        None => JsValue::NULL,
    };
    set(&obj, "dragStart", drag_start);
    set(&obj, "mouseDown", state.mouse_down);
    set(&obj, "theta", state.theta);
    set(&obj, "phi", state.phi);
    set(&obj, "lon", state.lon);
    set(&obj, "lat", state.lat);
    set(&obj, "fov", state.fov);
    set(&obj, "width", state.width);
    set(&obj, "height", state.height);
    obj.into()
}

/// Payload handed to JS subscribers. Events without data give `undefined`.
pub fn event_payload(event: &FrameEvent) -> JsValue {
    let with = |pairs: &[(&str, f32)]| {
        let obj = Object::new();
        for (k, v) in pairs {
            set(&obj, k, *v);
        }
        JsValue::from(obj)
    };
    match event {
        FrameEvent::Progress { percent } | FrameEvent::TimeUpdate { percent } => {
            with(&[("percent", *percent)])
        }
        FrameEvent::MouseDown { x, y } | FrameEvent::MouseMove { x, y } => {
            with(&[("x", *x), ("y", *y)])
        }
        FrameEvent::MouseWheel { delta } => with(&[("delta", *delta)]),
        FrameEvent::State(state) => state_object(state),
        _ => JsValue::UNDEFINED,
    }
}
