// Boundary normalization for wheel input.
//
// Browsers report wheel motion in several conventions. Everything here maps to
// one signed magnitude in pixel-like units where positive means "scroll down"
// (zoom in). The reducer only ever sees that value.

pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

// Pixels per line for line-mode deltas
pub const LINE_HEIGHT_PX: f32 = 16.0;
// Legacy `detail` counts ~3 lines per notch where `wheelDelta` counts 120
pub const LEGACY_DETAIL_SCALE: f32 = 40.0;

/// Raw wheel fields as read from a DOM event. Absent or non-finite fields are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelSample {
    /// Standard `WheelEvent.deltaY` (positive = down).
    pub delta_y: Option<f64>,
    pub delta_mode: u32,
    /// Legacy `wheelDeltaY` (positive = up).
    pub wheel_delta_y: Option<f64>,
    /// Legacy `wheelDelta` (positive = up).
    pub wheel_delta: Option<f64>,
    /// Legacy `DOMMouseScroll` `detail` (positive = down, in lines).
    pub detail: Option<f64>,
}

#[inline]
fn finite(v: Option<f64>) -> Option<f32> {
    v.filter(|v| v.is_finite()).map(|v| v as f32)
}

/// Normalized wheel delta; `page_height` scales page-mode deltas.
pub fn normalize_wheel(sample: &WheelSample, page_height: f32) -> f32 {
    if let Some(dy) = finite(sample.delta_y) {
        return match sample.delta_mode {
            DOM_DELTA_LINE => dy * LINE_HEIGHT_PX,
            DOM_DELTA_PAGE => dy * page_height.max(1.0),
            _ => dy,
        };
    }
    if let Some(wdy) = finite(sample.wheel_delta_y) {
        return -wdy;
    }
    if let Some(wd) = finite(sample.wheel_delta) {
        return -wd;
    }
    if let Some(detail) = finite(sample.detail) {
        return detail * LEGACY_DETAIL_SCALE;
    }
    0.0
}
