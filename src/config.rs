use crate::core::constants::{
    DEFAULT_FOV_DEG, FALLBACK_HEIGHT, FALLBACK_WIDTH, FOV_MAX_DEG, FOV_MIN_DEG,
};
use crate::error::FrameError;

/// Construction options for a frame.
///
/// `preload` and `autoplay` are handed to the video element untouched; when
/// unset the element keeps its own defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOptions {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub source: Option<String>,
    pub preload: Option<String>,
    pub autoplay: Option<bool>,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            field_of_view: DEFAULT_FOV_DEG,
            source: None,
            preload: None,
            autoplay: None,
        }
    }
}

impl FrameOptions {
    /// Surface size: explicit options first, then the host element's layout
    /// size, then a fixed fallback. An explicit zero is an error.
    pub fn resolve_size(&self, layout: (u32, u32)) -> Result<(u32, u32), FrameError> {
        let pick = |explicit: Option<u32>, measured: u32, fallback: u32| match explicit {
            Some(v) => v,
            None if measured > 0 => measured,
            None => fallback,
        };
        let width = pick(self.width, layout.0, FALLBACK_WIDTH);
        let height = pick(self.height, layout.1, FALLBACK_HEIGHT);
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidSize { width, height });
        }
        Ok((width, height))
    }

    /// Bring option values into range. A missing, zero or non-numeric field of
    /// view means the default; anything else is clamped. A blank source is unset.
    pub fn normalize(&mut self) {
        let fov = self.field_of_view;
        self.field_of_view = if fov.is_finite() && fov != 0.0 {
            fov.clamp(FOV_MIN_DEG, FOV_MAX_DEG)
        } else {
            DEFAULT_FOV_DEG
        };
        if matches!(self.source.as_deref(), Some(s) if s.trim().is_empty()) {
            self.source = None;
        }
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(false)
    }
}

/// Leading-integer parse for sizes given as strings ("800", "800px", " 640.5").
pub fn parse_dimension(text: &str) -> Option<u32> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// A scalar option value as read from the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// String form of the value, the way the host stringifies it.
    pub fn into_text(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", n as i64),
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(s) => s,
        }
    }
}
