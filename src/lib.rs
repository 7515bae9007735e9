#![cfg(target_arch = "wasm32")]
use crate::config::FrameOptions;
use crate::core::{EventKind, FrameEvent, FrameModel, Scene, SubscriptionId, ViewportState};
use crate::error::FrameError;
use crate::video::VideoBridge;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod input;
mod js;
mod render;
mod video;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slant-frame loaded");
    Ok(())
}

/// A 360° video viewer mounted inside a host element.
#[wasm_bindgen]
pub struct Frame {
    inner: Option<FrameInner>,
}

struct FrameInner {
    model: Rc<FrameModel>,
    video: Rc<VideoBridge>,
    canvas: web::HtmlCanvasElement,
    container: web::HtmlElement,
    render_loop: frame::LoopHandle,
    _input: Vec<EventListener>,
}

fn to_js_error(e: FrameError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Build a frame inside `parent`. Rejects when the options are invalid or
/// WebGPU is unavailable; nothing stays attached to the page in that case.
#[wasm_bindgen(js_name = createFrame)]
pub async fn create_frame(parent: web::Element, options: JsValue) -> Result<Frame, JsValue> {
    let options = js::frame_options(&options).map_err(to_js_error)?;
    build(&parent, options).await.map_err(|e| {
        log::error!("[frame] construction failed: {}", e);
        to_js_error(e)
    })
}

async fn build(parent: &web::Element, options: FrameOptions) -> Result<Frame, FrameError> {
    let (_window, document) = dom::window_document()?;
    let (width, height) = options.resolve_size(dom::layout_size(parent))?;

    let container: web::HtmlElement = dom::create(&document, "div")?;
    container.set_class_name("slant-frame");
    dom::set_style(&container, &[("position", "relative"), ("overflow", "hidden")]);
    dom::append(parent, &container)?;

    match assemble(&document, &container, &options, width, height).await {
        Ok(inner) => Ok(Frame { inner: Some(inner) }),
        Err(e) => {
            container.remove();
            Err(e)
        }
    }
}

async fn assemble(
    document: &web::Document,
    container: &web::HtmlElement,
    options: &FrameOptions,
    width: u32,
    height: u32,
) -> Result<FrameInner, FrameError> {
    let canvas: web::HtmlCanvasElement = dom::create(document, "canvas")?;
    dom::set_style(&canvas, &[("display", "block"), ("touch-action", "none")]);
    dom::append(container, &canvas)?;
    dom::sync_canvas_size(&canvas, width, height);

    let initial = ViewportState::new(width, height, options.field_of_view, instant::now());
    let scene = Scene::build(width, height, initial.fov);
    let gpu = frame::init_gpu(&canvas, &scene)
        .await
        .map_err(|e| FrameError::Gpu(format!("{e:#}")))?;

    let element = video::create_video(document, container, options)?;
    let model = Rc::new(FrameModel::new(initial));
    let video = Rc::new(VideoBridge::attach(
        element,
        model.clone(),
        options.autoplay(),
    ));
    let input = events::wire_input_handlers(&canvas, &model);

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        model: model.clone(),
        gpu,
        video: video.clone(),
        canvas: canvas.clone(),
    }));
    let render_loop = frame::start_loop(ctx);
    log::info!(
        "[frame] ready {}x{} fov={} src={:?}",
        width,
        height,
        initial.fov,
        options.source
    );

    Ok(FrameInner {
        model,
        video,
        canvas,
        container: container.clone(),
        render_loop,
        _input: input,
    })
}

#[wasm_bindgen]
impl Frame {
    pub fn play(&self) {
        if let Some(inner) = &self.inner {
            inner.video.play();
            inner.model.emit(FrameEvent::Play);
        }
    }

    pub fn pause(&self) {
        if let Some(inner) = &self.inner {
            inner.video.pause();
            inner.model.emit(FrameEvent::Pause);
        }
    }

    pub fn paused(&self) -> bool {
        self.inner.as_ref().map_or(true, |inner| inner.video.paused())
    }

    /// Resize the render surface (CSS pixels).
    pub fn resize(&self, width: u32, height: u32) {
        if let Some(inner) = &self.inner {
            let (width, height) = (width.max(1), height.max(1));
            dom::sync_canvas_size(&inner.canvas, width, height);
            inner.model.resize(width, height);
        }
    }

    pub fn src(&self) -> Option<String> {
        self.inner.as_ref().map(|inner| inner.video.src())
    }

    #[wasm_bindgen(js_name = setSrc)]
    pub fn set_src(&self, src: &str) {
        if let Some(inner) = &self.inner {
            inner.video.set_src(src);
        }
    }

    /// Snapshot of the viewport record, or `undefined` after `dispose()`.
    pub fn state(&self) -> JsValue {
        self.inner
            .as_ref()
            .map_or(JsValue::UNDEFINED, |inner| js::state_object(&inner.model.state()))
    }

    /// Subscribe `callback` to a named event. Returns an id for `off`.
    pub fn on(&self, name: &str, callback: js_sys::Function) -> Result<u32, JsValue> {
        let kind = EventKind::from_name(name)
            .ok_or_else(|| to_js_error(FrameError::InvalidOption(format!("unknown event {name:?}"))))?;
        let inner = self
            .inner
            .as_ref()
            .ok_or_else(|| JsValue::from(js_sys::Error::new("frame has been disposed")))?;
        let id = inner.model.on(kind, move |event| {
            callback
                .call1(&JsValue::NULL, &js::event_payload(event))
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!("{:?}", e))
        });
        Ok(id.0)
    }

    pub fn off(&self, id: u32) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|inner| inner.model.off(SubscriptionId(id)))
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&self, x: f32, y: f32) {
        if let Some(inner) = &self.inner {
            inner.model.pointer_down(x, y);
        }
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&self, x: f32, y: f32) {
        if let Some(inner) = &self.inner {
            inner.model.pointer_move(x, y);
        }
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&self) {
        if let Some(inner) = &self.inner {
            inner.model.pointer_up();
        }
    }

    /// Zoom by a normalized wheel delta (positive zooms in).
    pub fn wheel(&self, delta: f32) {
        if let Some(inner) = &self.inner {
            inner.model.wheel(delta);
        }
    }

    /// Stop rendering, drop all subscriptions and detach from the page.
    pub fn dispose(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        inner.render_loop.cancel();
        inner.model.events().clear();
        inner.container.remove();
        log::info!("[frame] disposed");
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        self.dispose();
    }
}
