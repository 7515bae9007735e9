// Fixed scene: an inward-facing UV sphere and the camera at its centre.

use super::camera::Camera;
use super::constants::{SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Build a UV sphere meant to be seen from the inside.
///
/// The x axis is mirrored so the equirectangular image is not reversed when
/// viewed from the centre, and every triangle winds counter-clockwise as seen
/// from the centre. Row 0 is the north pole (+Y), matching v = 0 at the top of
/// the video frame. Pole triangles that would collapse to a line are skipped.
pub fn build_sphere(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let row = w + 1;

    let mut vertices = Vec::with_capacity((row * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let polar = v * PI;
        let (sin_p, cos_p) = polar.sin_cos();
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_a, cos_a) = (u * TAU).sin_cos();
            vertices.push(SphereVertex {
                position: [radius * cos_a * sin_p, radius * cos_p, radius * sin_a * sin_p],
                uv: [u, v],
            });
        }
    }

    let mut indices = Vec::with_capacity((w * (2 * h - 2) * 3) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix;
            let b = a + row;
            let c = b + 1;
            let d = a + 1;
            if iy != 0 {
                indices.extend_from_slice(&[d, a, c]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[a, b, c]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

/// CPU half of the scene, built once per frame instance.
#[derive(Clone, Debug)]
pub struct Scene {
    pub mesh: SphereMesh,
    pub camera: Camera,
}

impl Scene {
    pub fn build(width: u32, height: u32, fov_deg: f32) -> Self {
        Self {
            mesh: build_sphere(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
            camera: Camera::new(width, height, fov_deg),
        }
    }
}

/// Clamp a texture extent to the device's 2D limit, never below 1x1.
pub fn fit_extent(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let max = max_dimension.max(1);
    (width.clamp(1, max), height.clamp(1, max))
}
