//! Playback bridge between the `<video>` element and the frame model.
//!
//! The element is created hidden inside the frame container. Its lifecycle
//! events are translated into viewport updates and public events:
//!
//! - `canplaythrough` starts playback when autoplay is set, then publishes
//!   `canplaythrough` and `ready`
//! - `progress` / `timeupdate` update `percent_loaded` (last writer wins)
//! - `ended` publishes `end` and `ended`
//!
//! Media queries that fail leave the previous progress value in place.

use crate::config::FrameOptions;
use crate::core::progress::{buffered_fraction, played_fraction};
use crate::core::{FrameEvent, FrameModel};
use crate::dom;
use crate::error::FrameError;
use gloo_events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

pub struct VideoBridge {
    video: web::HtmlVideoElement,
    _listeners: Vec<EventListener>,
}

/// Create the hidden video element and apply the media options untouched.
pub fn create_video(
    document: &web::Document,
    container: &web::Element,
    options: &FrameOptions,
) -> Result<web::HtmlVideoElement, FrameError> {
    let video: web::HtmlVideoElement = dom::create(document, "video")?;
    // Frames are copied to a GPU texture, which needs a CORS-clean source.
    video.set_cross_origin(Some("anonymous"));
    _ = video.set_attribute("playsinline", "true");
    if let Some(preload) = &options.preload {
        video.set_preload(preload);
    }
    if let Some(autoplay) = options.autoplay {
        video.set_autoplay(autoplay);
    }
    dom::set_style(
        &video,
        &[
            ("position", "absolute"),
            ("width", "1px"),
            ("height", "1px"),
            ("opacity", "0"),
            ("pointer-events", "none"),
        ],
    );
    if let Some(src) = &options.source {
        video.set_src(src);
    }
    dom::append(container, &video)?;
    Ok(video)
}

impl VideoBridge {
    pub fn attach(video: web::HtmlVideoElement, model: Rc<FrameModel>, autoplay: bool) -> Self {
        let mut listeners = Vec::with_capacity(5);

        {
            let video_ready = video.clone();
            let model = model.clone();
            listeners.push(EventListener::new(&video, "canplaythrough", move |_| {
                if autoplay {
                    start_playback(&video_ready);
                }
                model.emit(FrameEvent::CanPlayThrough);
                model.emit(FrameEvent::Ready);
            }));
        }
        {
            let video_progress = video.clone();
            let model = model.clone();
            listeners.push(EventListener::new(&video, "progress", move |_| {
                model.progress(buffered(&video_progress));
            }));
        }
        {
            let video_time = video.clone();
            let model = model.clone();
            listeners.push(EventListener::new(&video, "timeupdate", move |_| {
                let duration = Some(video_time.duration());
                model.time_update(played_fraction(video_time.current_time(), duration));
            }));
        }
        {
            let model = model.clone();
            listeners.push(EventListener::new(&video, "ended", move |_| {
                model.emit(FrameEvent::End);
                model.emit(FrameEvent::Ended);
            }));
        }
        {
            let video_err = video.clone();
            listeners.push(EventListener::new(&video, "error", move |_| {
                log::error!("[video] media error while loading {:?}", video_err.src());
            }));
        }

        Self {
            video,
            _listeners: listeners,
        }
    }

    pub fn element(&self) -> &web::HtmlVideoElement {
        &self.video
    }

    pub fn play(&self) {
        start_playback(&self.video);
    }

    pub fn pause(&self) {
        if let Err(e) = self.video.pause() {
            log::warn!("[video] pause failed: {:?}", e);
        }
    }

    pub fn paused(&self) -> bool {
        self.video.paused()
    }

    pub fn src(&self) -> String {
        self.video.src()
    }

    pub fn set_src(&self, src: &str) {
        log::info!("[video] source -> {}", src);
        self.video.set_src(src);
    }

    /// True when the element holds a decoded frame that can be copied.
    pub fn has_frame(&self) -> bool {
        self.video.ready_state() >= HAVE_CURRENT_DATA
            && self.video.video_width() > 0
            && self.video.video_height() > 0
    }
}

impl Drop for VideoBridge {
    fn drop(&mut self) {
        _ = self.video.pause();
        self.video.remove_attribute("src").ok();
        self.video.load();
    }
}

fn start_playback(video: &web::HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[video] play() rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[video] play() failed: {:?}", e),
    }
}

fn buffered(video: &web::HtmlVideoElement) -> Option<f32> {
    let ranges = video.buffered();
    let count = ranges.length();
    let end = if count > 0 {
        ranges.end(count - 1).ok()
    } else {
        None
    };
    buffered_fraction(end, Some(video.duration()), byte_progress(video))
}

// Non-standard byte counters exposed by some older engines.
fn byte_progress(video: &web::HtmlVideoElement) -> Option<(f64, f64)> {
    let read = |name: &str| {
        js_sys::Reflect::get(video, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
    };
    Some((read("bufferedBytes")?, read("bytesTotal")?))
}
