use crate::error::FrameError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), FrameError> {
    let window = web::window().ok_or(FrameError::NoWindow)?;
    let document = window.document().ok_or(FrameError::NoDocument)?;
    Ok((window, document))
}

/// Create an element and cast it to its concrete type.
pub fn create<T: JsCast>(document: &web::Document, tag: &str) -> Result<T, FrameError> {
    document
        .create_element(tag)
        .map_err(|e| FrameError::Dom(format!("create <{tag}>: {e:?}")))?
        .dyn_into::<T>()
        .map_err(|_| FrameError::Dom(format!("<{tag}> has an unexpected type")))
}

pub fn append(parent: &web::Node, child: &web::Node) -> Result<(), FrameError> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| FrameError::Dom(format!("append: {e:?}")))
}

/// Layout size of an element in CSS pixels (0 when it has no layout yet).
pub fn layout_size(el: &web::Element) -> (u32, u32) {
    let rect = el.get_bounding_client_rect();
    (rect.width().max(0.0) as u32, rect.height().max(0.0) as u32)
}

pub fn set_style(el: &web::HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

/// Size the canvas to `width` x `height` CSS pixels and its backing store to
/// match the device pixel ratio. Returns the backing size.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_px = ((width as f64 * dpr) as u32).max(1);
    let h_px = ((height as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(
        canvas,
        &[
            ("width", format!("{width}px").as_str()),
            ("height", format!("{height}px").as_str()),
        ],
    );
    (w_px, h_px)
}
