// Host-side tests for the viewport reducer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod emitter {
        include!("../src/core/emitter.rs");
    }
    pub mod events {
        include!("../src/core/events.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::constants::*;
use crate::core::events::FrameEvent;
use crate::core::state::*;

fn fresh() -> ViewportState {
    ViewportState::new(800, 400, 40.0, 0.0)
}

fn run(state: ViewportState, actions: &[Action]) -> ViewportState {
    actions.iter().fold(state, |s, a| s.reduce(*a).state)
}

#[test]
fn construction_defaults() {
    let s = fresh();
    assert_eq!(s.fov, 40.0);
    assert_eq!(s.lat, 0.0);
    assert_eq!(s.lon, 0.0);
    assert!(!s.mouse_down);
    assert_eq!(s.drag_start, None);
    assert_eq!((s.width, s.height), (800, 400));
    assert_eq!(s.percent_loaded, 0.0);
}

#[test]
fn construction_clamps_fov_and_size() {
    assert_eq!(ViewportState::new(10, 10, 500.0, 0.0).fov, FOV_MAX_DEG);
    assert_eq!(ViewportState::new(10, 10, 0.5, 0.0).fov, FOV_MIN_DEG);
    assert_eq!(ViewportState::new(10, 10, f32::NAN, 0.0).fov, DEFAULT_FOV_DEG);
    let s = ViewportState::new(0, 0, 40.0, 0.0);
    assert_eq!((s.width, s.height), (1, 1));
}

#[test]
fn drag_accumulates_lon_and_lat() {
    let s = run(
        fresh(),
        &[
            Action::PointerDown { x: 100.0, y: 100.0 },
            Action::PointerMove { x: 120.0, y: 80.0 },
        ],
    );
    assert_eq!(s.lon, 20.0);
    assert_eq!(s.lat, 20.0);
    assert_eq!(s.drag_start, Some(DragAnchor { x: 120.0, y: 80.0 }));

    // Deltas are taken from the last move, not from the press.
    let s = run(s, &[Action::PointerMove { x: 130.0, y: 80.0 }]);
    assert_eq!(s.lon, 30.0);
    assert_eq!(s.lat, 20.0);
}

#[test]
fn move_without_press_changes_nothing() {
    let before = fresh();
    let t = before.reduce(Action::PointerMove { x: 500.0, y: -300.0 });
    assert_eq!(t.state, before);
    assert_eq!(t.events.len(), 2);
}

#[test]
fn pointer_up_twice_is_idempotent() {
    let s = run(
        fresh(),
        &[
            Action::PointerDown { x: 0.0, y: 0.0 },
            Action::PointerMove { x: 15.0, y: -5.0 },
        ],
    );
    let (lon, lat) = (s.lon, s.lat);
    let once = s.reduce(Action::PointerUp).state;
    let twice = once.reduce(Action::PointerUp).state;
    for st in [once, twice] {
        assert!(!st.mouse_down);
        assert_eq!(st.drag_start, None);
        assert_eq!((st.lon, st.lat), (lon, lat));
    }
}

#[test]
fn lat_stays_clamped_through_any_drag() {
    let mut s = fresh().reduce(Action::PointerDown { x: 0.0, y: 0.0 }).state;
    let moves = [-1000.0, 37.0, 5000.0, -12.5, -90.0, 3.0, 170.0, -400.0];
    let mut y = 0.0;
    for dy in moves {
        y += dy;
        s = s.reduce(Action::PointerMove { x: 0.0, y }).state;
        assert!(s.lat >= LAT_MIN_DEG && s.lat <= LAT_MAX_DEG, "lat {}", s.lat);
    }
    let press = Action::PointerDown { x: 0.0, y: 0.0 };
    let up = run(fresh(), &[press, Action::PointerMove { x: 0.0, y: -1000.0 }]);
    assert_eq!(up.lat, LAT_MAX_DEG);
    let down = run(fresh(), &[press, Action::PointerMove { x: 0.0, y: 1000.0 }]);
    assert_eq!(down.lat, LAT_MIN_DEG);
}

#[test]
fn lon_is_unbounded() {
    let s = run(
        fresh(),
        &[
            Action::PointerDown { x: 0.0, y: 0.0 },
            Action::PointerMove { x: 400.0, y: 0.0 },
            Action::PointerMove { x: 800.0, y: 0.0 },
        ],
    );
    assert_eq!(s.lon, 800.0);
}

#[test]
fn non_finite_pointer_input_is_ignored() {
    let s = run(fresh(), &[Action::PointerDown { x: 10.0, y: 10.0 }]);
    let t = s.reduce(Action::PointerMove { x: f32::NAN, y: 4.0 });
    assert_eq!((t.state.lon, t.state.lat), (0.0, 0.0));
    assert_eq!(t.state.drag_start, s.drag_start);
    assert!(matches!(t.events.last(), Some(FrameEvent::State(_))));
}

#[test]
fn wheel_zooms_in_on_positive_delta() {
    let s = fresh().reduce(Action::Wheel { delta: 10.0 }).state;
    assert!(s.fov < 40.0);
    assert!(s.fov >= FOV_MIN_DEG);
    assert!((s.fov - 39.5).abs() < 1e-5);
}

#[test]
fn wheel_saturates_at_bounds() {
    let mut s = fresh();
    for _ in 0..200 {
        s = s.reduce(Action::Wheel { delta: 1000.0 }).state;
        assert!(s.fov >= FOV_MIN_DEG && s.fov <= FOV_MAX_DEG);
    }
    assert_eq!(s.fov, FOV_MIN_DEG);
    for _ in 0..200 {
        s = s.reduce(Action::Wheel { delta: -1000.0 }).state;
    }
    assert_eq!(s.fov, FOV_MAX_DEG);
    let t = s.reduce(Action::Wheel { delta: f32::INFINITY });
    assert_eq!(t.state.fov, FOV_MAX_DEG);
}

#[test]
fn mutations_publish_named_event_then_one_state() {
    let actions = [
        Action::PointerDown { x: 1.0, y: 2.0 },
        Action::PointerMove { x: 3.0, y: 4.0 },
        Action::PointerUp,
        Action::Wheel { delta: 1.0 },
        Action::Progress { fraction: Some(0.5) },
        Action::TimeUpdate { fraction: None },
    ];
    let mut s = fresh();
    for a in actions {
        let t = s.reduce(a);
        assert_eq!(t.events.len(), 2, "{a:?}");
        let states = t
            .events
            .iter()
            .filter(|e| matches!(e, FrameEvent::State(_)))
            .count();
        assert_eq!(states, 1);
        assert_eq!(t.events[1], FrameEvent::State(t.state));
        s = t.state;
    }
}

#[test]
fn progress_is_clamped_and_last_writer_wins() {
    let s = fresh().reduce(Action::Progress { fraction: Some(0.6) }).state;
    assert_eq!(s.percent_loaded, 0.6);
    let s = s.reduce(Action::TimeUpdate { fraction: Some(0.1) }).state;
    assert_eq!(s.percent_loaded, 0.1);
    let s = s.reduce(Action::Progress { fraction: Some(7.0) }).state;
    assert_eq!(s.percent_loaded, 1.0);
    let t = s.reduce(Action::TimeUpdate { fraction: None });
    assert_eq!(t.state.percent_loaded, 1.0);
    assert_eq!(t.events[0], FrameEvent::TimeUpdate { percent: 1.0 });
    let s = t.state.reduce(Action::Progress { fraction: Some(f32::NAN) }).state;
    assert_eq!(s.percent_loaded, 1.0);
}

#[test]
fn texture_refresh_is_throttled() {
    let s = fresh();
    let a = s.reduce(Action::Tick { now_ms: 100.0 });
    assert!(a.upload_texture);
    assert_eq!(a.state.timestamp, 100.0);
    let b = a.state.reduce(Action::Tick { now_ms: 110.0 });
    assert!(!b.upload_texture);
    assert_eq!(b.state.timestamp, 100.0);

    let c = a.state.reduce(Action::Tick { now_ms: 140.0 });
    assert!(c.upload_texture);
    assert_eq!(c.state.timestamp, 140.0);
}

#[test]
fn tick_derives_angles_and_announces_refresh() {
    let s = run(
        fresh(),
        &[
            Action::PointerDown { x: 0.0, y: 0.0 },
            Action::PointerMove { x: 90.0, y: 0.0 },
        ],
    );
    let t = s.reduce(Action::Tick { now_ms: 5.0 });
    assert!((t.state.theta - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert!((t.state.phi - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert_eq!(t.events.as_slice(), &[FrameEvent::Refresh]);
}

#[test]
fn resize_publishes_state_only() {
    let t = fresh().reduce(Action::Resize { width: 1024, height: 0 });
    assert_eq!((t.state.width, t.state.height), (1024, 1));
    assert_eq!(t.events.as_slice(), &[FrameEvent::State(t.state)]);
}
