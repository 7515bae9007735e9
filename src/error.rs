use thiserror::Error;

/// Failures that abort frame construction.
///
/// Range problems in input are never reported here; they are clamped by the
/// reducer. Media query failures are absorbed by the playback bridge.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrameError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("graphics initialisation failed: {0}")]
    Gpu(String),
    #[error("invalid frame size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
