// Load-progress fractions reported by the playback bridge.
//
// Each helper returns `None` when the media cannot answer; the caller keeps
// the last known value in that case.

#[inline]
fn usable_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Buffered fraction: end of the furthest buffered range over the duration,
/// falling back to `(buffered_bytes, total_bytes)` when the range query is unusable.
pub fn buffered_fraction(
    buffered_end: Option<f64>,
    duration: Option<f64>,
    bytes: Option<(f64, f64)>,
) -> Option<f32> {
    let by_range = match (buffered_end, usable_duration(duration)) {
        (Some(end), Some(d)) if end.is_finite() && end >= 0.0 => Some(end / d),
        _ => None,
    };
    by_range
        .or_else(|| {
            bytes.and_then(|(loaded, total)| {
                (loaded.is_finite() && total.is_finite() && total > 0.0 && loaded >= 0.0)
                    .then(|| loaded / total)
            })
        })
        .map(|f| f.clamp(0.0, 1.0) as f32)
}

/// Played fraction: current position over the duration.
pub fn played_fraction(current_time: f64, duration: Option<f64>) -> Option<f32> {
    let d = usable_duration(duration)?;
    if !current_time.is_finite() || current_time < 0.0 {
        return None;
    }
    Some((current_time / d).clamp(0.0, 1.0) as f32)
}
