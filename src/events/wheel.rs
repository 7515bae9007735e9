use crate::core::FrameModel;
use crate::input::{normalize_wheel, WheelSample};
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Zoom on wheel. The page is not scrolled while the pointer is over the canvas.
pub fn wire_wheel(canvas: &web::HtmlCanvasElement, model: &Rc<FrameModel>) -> EventListener {
    let model = model.clone();
    EventListener::new_with_options(
        canvas,
        "wheel",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        },
        move |ev| {
            let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
                return;
            };
            ev.prevent_default();
            let sample = sample(wheel);
            let page_height = model.state().height as f32;
            model.wheel(normalize_wheel(&sample, page_height));
        },
    )
}

fn sample(ev: &web::WheelEvent) -> WheelSample {
    // Legacy fields are not part of WheelEvent's typed surface.
    let legacy = |name: &str| {
        js_sys::Reflect::get(ev, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
    };
    WheelSample {
        delta_y: Some(ev.delta_y()),
        delta_mode: ev.delta_mode(),
        wheel_delta_y: legacy("wheelDeltaY"),
        wheel_delta: legacy("wheelDelta"),
        detail: Some(ev.detail() as f64),
    }
}
