// DOM input wiring for the frame canvas.
//
// Listeners are returned to the caller and detach when dropped.

mod pointer;
mod wheel;

use crate::core::FrameModel;
use gloo_events::EventListener;
use std::rc::Rc;
use web_sys as web;

pub fn wire_input_handlers(
    canvas: &web::HtmlCanvasElement,
    model: &Rc<FrameModel>,
) -> Vec<EventListener> {
    let mut listeners = pointer::wire_pointer(canvas, model);
    listeners.push(wheel::wire_wheel(canvas, model));
    listeners
}
