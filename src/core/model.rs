// Frame model: the viewport record plus the event stream it publishes on.
//
// All methods take `&self`. The record sits in a `Cell` and is replaced whole,
// so handlers may call back into the model while an event is being delivered.

use super::camera::Orientation;
use super::emitter::{Emitter, SubscriptionId};
use super::events::{EventKind, FrameEvent};
use super::state::{Action, Transition, ViewportState};
use std::cell::Cell;

pub struct FrameModel {
    state: Cell<ViewportState>,
    events: Emitter<FrameEvent>,
}

/// What the render loop needs for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlan {
    pub state: ViewportState,
    pub orientation: Orientation,
    pub upload_texture: bool,
}

impl FrameModel {
    pub fn new(initial: ViewportState) -> Self {
        Self {
            state: Cell::new(initial),
            events: Emitter::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> ViewportState {
        self.state.get()
    }

    pub fn events(&self) -> &Emitter<FrameEvent> {
        &self.events
    }

    pub fn on(
        &self,
        kind: EventKind,
        handler: impl FnMut(&FrameEvent) -> anyhow::Result<()> + 'static,
    ) -> SubscriptionId {
        self.events.on(kind, handler)
    }

    pub fn off(&self, id: SubscriptionId) -> bool {
        self.events.off(id)
    }

    /// Publish an event that does not touch the viewport record.
    pub fn emit(&self, event: FrameEvent) {
        self.events.emit(&event);
    }

    /// Apply one action and publish what it announced.
    pub fn dispatch(&self, action: Action) -> ViewportState {
        self.apply(action).state
    }

    fn apply(&self, action: Action) -> Transition {
        let transition = self.state.get().reduce(action);
        self.state.set(transition.state);
        for event in &transition.events {
            self.events.emit(event);
        }
        transition
    }

    pub fn pointer_down(&self, x: f32, y: f32) -> ViewportState {
        self.dispatch(Action::PointerDown { x, y })
    }

    pub fn pointer_move(&self, x: f32, y: f32) -> ViewportState {
        self.dispatch(Action::PointerMove { x, y })
    }

    pub fn pointer_up(&self) -> ViewportState {
        self.dispatch(Action::PointerUp)
    }

    pub fn wheel(&self, delta: f32) -> ViewportState {
        self.dispatch(Action::Wheel { delta })
    }

    pub fn progress(&self, fraction: Option<f32>) -> ViewportState {
        self.dispatch(Action::Progress { fraction })
    }

    pub fn time_update(&self, fraction: Option<f32>) -> ViewportState {
        self.dispatch(Action::TimeUpdate { fraction })
    }

    pub fn resize(&self, width: u32, height: u32) -> ViewportState {
        self.dispatch(Action::Resize { width, height })
    }

    /// Start of a render tick: throttle the texture refresh and solve the
    /// camera. Publishes `refresh`.
    pub fn begin_tick(&self, now_ms: f64) -> TickPlan {
        let transition = self.apply(Action::Tick { now_ms });
        TickPlan {
            state: transition.state,
            orientation: transition.state.orientation(),
            upload_texture: transition.upload_texture,
        }
    }

    /// End of a render tick. Publishes `draw` when the scene was drawn, then
    /// the state snapshot.
    pub fn end_tick(&self, drawn: bool) {
        if drawn {
            self.events.emit(&FrameEvent::Draw);
        }
        self.events.emit(&FrameEvent::State(self.state.get()));
    }
}
