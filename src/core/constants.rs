// Navigation and scene tuning constants shared by the reducer, the solver and the GPU scene.

// Sphere the video is projected onto (world units)
pub const SPHERE_RADIUS: f32 = 500.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 80; // around the equator
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 50; // pole to pole

// Perspective camera
pub const DEFAULT_FOV_DEG: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Look direction limits (degrees). Latitude stops short of the poles.
pub const LAT_MIN_DEG: f32 = -85.0;
pub const LAT_MAX_DEG: f32 = 85.0;

// Zoom limits and wheel response
pub const FOV_MIN_DEG: f32 = 3.0;
pub const FOV_MAX_DEG: f32 = 100.0;
pub const WHEEL_VELOCITY: f32 = -0.05; // fov change per normalized wheel unit

// Video texture refresh cap (~30 fps), independent of display refresh
pub const TEXTURE_REFRESH_INTERVAL_MS: f64 = 32.0;

// Fallback surface size when neither the options nor the parent element give one
pub const FALLBACK_WIDTH: u32 = 640;
pub const FALLBACK_HEIGHT: u32 = 360;

// Clear colour behind the sphere: #333333, given in linear space for the sRGB swapchain
pub const CLEAR_RGB_LINEAR: [f64; 3] = [0.0331, 0.0331, 0.0331];
