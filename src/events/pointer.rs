use crate::core::FrameModel;
use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// MouseEvent.button for the primary button
const PRIMARY_BUTTON: i16 = 0;

/// Drag-to-look on the canvas. Coordinates are page pixels; the pointer is
/// captured while a drag is active so it keeps tracking outside the canvas.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, model: &Rc<FrameModel>) -> Vec<EventListener> {
    vec![
        wire_pointerdown(canvas, model),
        wire_pointermove(canvas, model),
        wire_pointerup(canvas, model, "pointerup"),
        wire_pointerup(canvas, model, "pointercancel"),
    ]
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, model: &Rc<FrameModel>) -> EventListener {
    let model = model.clone();
    let canvas_capture = canvas.clone();
    EventListener::new(canvas, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if ev.button() != PRIMARY_BUTTON {
            return;
        }
        _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        model.pointer_down(ev.page_x() as f32, ev.page_y() as f32);
        ev.prevent_default();
    })
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, model: &Rc<FrameModel>) -> EventListener {
    let model = model.clone();
    EventListener::new(canvas, "pointermove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        model.pointer_move(ev.page_x() as f32, ev.page_y() as f32);
    })
}

fn wire_pointerup(
    canvas: &web::HtmlCanvasElement,
    model: &Rc<FrameModel>,
    event_type: &'static str,
) -> EventListener {
    let model = model.clone();
    let canvas_capture = canvas.clone();
    EventListener::new(canvas, event_type, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if canvas_capture.has_pointer_capture(ev.pointer_id()) {
            _ = canvas_capture.release_pointer_capture(ev.pointer_id());
        }
        model.pointer_up();
    })
}
