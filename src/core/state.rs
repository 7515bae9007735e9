// Viewport state and its transitions.
//
// Every input, media and tick event is an `Action`. `ViewportState::reduce`
// computes the whole next record before anything is stored, and returns the
// events that announce the change. Mutating actions always end with a
// `FrameEvent::State` snapshot.

use super::camera::{clamp_lat, solve, Orientation};
use super::constants::{
    DEFAULT_FOV_DEG, FOV_MAX_DEG, FOV_MIN_DEG, TEXTURE_REFRESH_INTERVAL_MS, WHEEL_VELOCITY,
};
use super::events::FrameEvent;
use smallvec::{smallvec, SmallVec};

/// Last pointer position seen while dragging (page coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Buffered or played fraction in [0, 1]; last writer wins.
    pub percent_loaded: f32,
    /// Time of the last texture refresh (ms, same clock as ticks).
    pub timestamp: f64,
    pub drag_start: Option<DragAnchor>,
    pub mouse_down: bool,
    /// Derived on every tick, radians.
    pub theta: f32,
    pub phi: f32,
    /// Degrees, unbounded.
    pub lon: f32,
    /// Degrees, always within [LAT_MIN_DEG, LAT_MAX_DEG].
    pub lat: f32,
    /// Degrees, always within [FOV_MIN_DEG, FOV_MAX_DEG].
    pub fov: f32,
    pub width: u32,
    pub height: u32,
}

impl ViewportState {
    pub fn new(width: u32, height: u32, fov_deg: f32, now_ms: f64) -> Self {
        let fov = if fov_deg.is_finite() {
            clamp_fov(fov_deg)
        } else {
            DEFAULT_FOV_DEG
        };
        Self {
            percent_loaded: 0.0,
            timestamp: now_ms,
            drag_start: None,
            mouse_down: false,
            theta: 0.0,
            phi: 0.0,
            lon: 0.0,
            lat: 0.0,
            fov,
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        solve(self.lon, self.lat)
    }

    pub fn reduce(self, action: Action) -> Transition {
        let mut next = self;
        match action {
            Action::PointerDown { x, y } => {
                next.mouse_down = true;
                next.drag_start = anchor(x, y);
                Transition::publish(next, FrameEvent::MouseDown { x, y })
            }
            Action::PointerMove { x, y } => {
                if next.mouse_down {
                    if let Some(to) = anchor(x, y) {
                        if let Some(from) = next.drag_start {
                            next.lon += to.x - from.x;
                            next.lat = clamp_lat(next.lat - (to.y - from.y));
                        }
                        next.drag_start = Some(to);
                    }
                }
                Transition::publish(next, FrameEvent::MouseMove { x, y })
            }
            Action::PointerUp => {
                next.mouse_down = false;
                next.drag_start = None;
                Transition::publish(next, FrameEvent::MouseUp)
            }
            Action::Wheel { delta } => {
                if delta.is_finite() {
                    next.fov = clamp_fov(next.fov + delta * WHEEL_VELOCITY);
                }
                Transition::publish(next, FrameEvent::MouseWheel { delta })
            }
            Action::Progress { fraction } => {
                if let Some(f) = fraction.filter(|f| f.is_finite()) {
                    next.percent_loaded = f.clamp(0.0, 1.0);
                }
                let percent = next.percent_loaded;
                Transition::publish(next, FrameEvent::Progress { percent })
            }
            Action::TimeUpdate { fraction } => {
                if let Some(f) = fraction.filter(|f| f.is_finite()) {
                    next.percent_loaded = f.clamp(0.0, 1.0);
                }
                let percent = next.percent_loaded;
                Transition::publish(next, FrameEvent::TimeUpdate { percent })
            }
            Action::Resize { width, height } => {
                next.width = width.max(1);
                next.height = height.max(1);
                Transition {
                    state: next,
                    events: smallvec![FrameEvent::State(next)],
                    upload_texture: false,
                }
            }
            Action::Tick { now_ms } => {
                let upload_texture = now_ms - next.timestamp >= TEXTURE_REFRESH_INTERVAL_MS;
                if upload_texture {
                    next.timestamp = now_ms;
                }
                next.lat = clamp_lat(next.lat);
                let o = next.orientation();
                next.theta = o.theta;
                next.phi = o.phi;
                // State is republished once the draw has been attempted.
                Transition {
                    state: next,
                    events: smallvec![FrameEvent::Refresh],
                    upload_texture,
                }
            }
        }
    }
}

#[inline]
pub fn clamp_fov(fov_deg: f32) -> f32 {
    fov_deg.clamp(FOV_MIN_DEG, FOV_MAX_DEG)
}

#[inline]
fn anchor(x: f32, y: f32) -> Option<DragAnchor> {
    (x.is_finite() && y.is_finite()).then_some(DragAnchor { x, y })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    /// Normalized wheel magnitude; positive zooms in.
    Wheel { delta: f32 },
    /// Buffered fraction, `None` when the media could not report it.
    Progress { fraction: Option<f32> },
    /// Played fraction, `None` when the media could not report it.
    TimeUpdate { fraction: Option<f32> },
    Resize { width: u32, height: u32 },
    Tick { now_ms: f64 },
}

/// Result of a reduction: the next record and the events announcing it.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: ViewportState,
    pub events: SmallVec<[FrameEvent; 2]>,
    /// Set by ticks that crossed the texture refresh interval.
    pub upload_texture: bool,
}

impl Transition {
    fn publish(state: ViewportState, event: FrameEvent) -> Self {
        Self {
            state,
            events: smallvec![event, FrameEvent::State(state)],
            upload_texture: false,
        }
    }
}
