pub mod camera;
pub mod constants;
pub mod emitter;
pub mod events;
pub mod model;
pub mod progress;
pub mod scene;
pub mod state;

pub use camera::*;
pub use constants::*;
pub use emitter::{Emitter, Keyed, SubscriptionId};
pub use events::*;
pub use model::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../../shaders/sphere.wgsl");
