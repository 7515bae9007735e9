// Named events published by a frame.

use super::emitter::Keyed;
use super::state::ViewportState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Ready,
    CanPlayThrough,
    Play,
    Pause,
    End,
    Ended,
    Progress,
    TimeUpdate,
    MouseDown,
    MouseUp,
    MouseMove,
    MouseWheel,
    State,
    Refresh,
    Draw,
}

impl EventKind {
    pub const ALL: [EventKind; 15] = [
        EventKind::Ready,
        EventKind::CanPlayThrough,
        EventKind::Play,
        EventKind::Pause,
        EventKind::End,
        EventKind::Ended,
        EventKind::Progress,
        EventKind::TimeUpdate,
        EventKind::MouseDown,
        EventKind::MouseUp,
        EventKind::MouseMove,
        EventKind::MouseWheel,
        EventKind::State,
        EventKind::Refresh,
        EventKind::Draw,
    ];

    /// Name used by JavaScript subscribers.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Ready => "ready",
            EventKind::CanPlayThrough => "canplaythrough",
            EventKind::Play => "play",
            EventKind::Pause => "pause",
            EventKind::End => "end",
            EventKind::Ended => "ended",
            EventKind::Progress => "progress",
            EventKind::TimeUpdate => "timeupdate",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseUp => "mouseup",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseWheel => "mousewheel",
            EventKind::State => "state",
            EventKind::Refresh => "refresh",
            EventKind::Draw => "draw",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == name)
    }
}

/// Event payloads. `State` always carries a full snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameEvent {
    Ready,
    CanPlayThrough,
    Play,
    Pause,
    End,
    Ended,
    Progress { percent: f32 },
    TimeUpdate { percent: f32 },
    MouseDown { x: f32, y: f32 },
    MouseUp,
    MouseMove { x: f32, y: f32 },
    MouseWheel { delta: f32 },
    State(ViewportState),
    Refresh,
    Draw,
}

impl FrameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            FrameEvent::Ready => EventKind::Ready,
            FrameEvent::CanPlayThrough => EventKind::CanPlayThrough,
            FrameEvent::Play => EventKind::Play,
            FrameEvent::Pause => EventKind::Pause,
            FrameEvent::End => EventKind::End,
            FrameEvent::Ended => EventKind::Ended,
            FrameEvent::Progress { .. } => EventKind::Progress,
            FrameEvent::TimeUpdate { .. } => EventKind::TimeUpdate,
            FrameEvent::MouseDown { .. } => EventKind::MouseDown,
            FrameEvent::MouseUp => EventKind::MouseUp,
            FrameEvent::MouseMove { .. } => EventKind::MouseMove,
            FrameEvent::MouseWheel { .. } => EventKind::MouseWheel,
            FrameEvent::State(_) => EventKind::State,
            FrameEvent::Refresh => EventKind::Refresh,
            FrameEvent::Draw => EventKind::Draw,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl Keyed for FrameEvent {
    type Key = EventKind;

    fn key(&self) -> EventKind {
        self.kind()
    }
}
