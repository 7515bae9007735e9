// Perspective camera and the spherical look-around solver.
//
// The viewer sits inside the sphere and looks at the surface point indexed by
// (lon, lat). The solver is recomputed from scratch on every tick.

use super::constants::{CAMERA_FAR, CAMERA_NEAR, LAT_MAX_DEG, LAT_MIN_DEG, SPHERE_RADIUS};
use glam::{Mat4, Vec3};

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera for a `width` x `height` surface with a vertical field of view in degrees.
    pub fn new(width: u32, height: u32, fov_deg: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy_radians: fov_deg.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn set_fov(&mut self, fov_deg: f32) {
        self.fovy_radians = fov_deg.to_radians();
    }

    /// Place the camera according to a solved orientation.
    pub fn apply(&mut self, orientation: &Orientation) {
        self.eye = orientation.eye;
        self.target = orientation.target;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[inline]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Camera pose derived from the accumulated look direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Azimuth in radians (from `lon`).
    pub theta: f32,
    /// Polar angle in radians measured from +Y (from `lat`).
    pub phi: f32,
    /// Point on the sphere surface the camera looks at.
    pub target: Vec3,
    /// Camera position, mirrored through the centre.
    pub eye: Vec3,
}

#[inline]
pub fn clamp_lat(lat_deg: f32) -> f32 {
    lat_deg.clamp(LAT_MIN_DEG, LAT_MAX_DEG)
}

/// Spherical-to-Cartesian projection of the look direction onto the sphere.
pub fn solve(lon_deg: f32, lat_deg: f32) -> Orientation {
    let lat = clamp_lat(lat_deg);
    let theta = lon_deg.to_radians();
    let phi = (90.0 - lat).to_radians();

    let target = Vec3::new(
        SPHERE_RADIUS * phi.sin() * theta.cos(),
        SPHERE_RADIUS * phi.cos(),
        SPHERE_RADIUS * phi.sin() * theta.sin(),
    );

    Orientation {
        theta,
        phi,
        target,
        eye: -target,
    }
}
