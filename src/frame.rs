use crate::core::FrameModel;
use crate::render;
use crate::video::VideoBridge;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub model: Rc<FrameModel>,
    pub gpu: render::GpuState,
    pub video: Rc<VideoBridge>,
    pub canvas: web::HtmlCanvasElement,
}

impl FrameContext {
    /// One render tick: refresh, solve, draw, publish.
    pub fn frame(&mut self) {
        let plan = self.model.begin_tick(instant::now());

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);

        if plan.upload_texture && self.video.has_frame() {
            self.gpu.upload_video(self.video.element());
        }

        let state = plan.state;
        self.gpu
            .set_camera(&plan.orientation, state.fov, state.width, state.height);
        let drawn = match self.gpu.render() {
            Ok(drawn) => drawn,
            Err(e) => {
                log::error!("[gpu] render error: {:?}", e);
                false
            }
        };
        self.model.end_tick(drawn);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &crate::core::Scene,
) -> anyhow::Result<render::GpuState> {
    render::GpuState::new(canvas, scene).await
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Cancellation handle for a running render loop.
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl LoopHandle {
    /// Stop the loop. Safe to call from inside a tick and more than once.
    pub fn cancel(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(w), Some(id)) = (web::window(), self.pending.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure may be on the stack right now; release it afterwards.
        let tick = self.tick.clone();
        spawn_local(async move {
            tick.borrow_mut().take();
        });
        log::info!("[frame] render loop stopped");
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let stopped = Rc::new(Cell::new(false));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let stopped_tick = stopped.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        // A subscriber may have stopped the loop during the tick.
        if stopped_tick.get() {
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(
                    w.request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }
    log::info!("[frame] render loop started");

    LoopHandle {
        stopped,
        pending,
        tick,
    }
}
