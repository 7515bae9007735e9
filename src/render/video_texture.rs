use super::helpers;
use crate::core::fit_extent;
use web_sys as web;

pub(crate) const VIDEO_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

// Shown until the first frame is copied in (#333333, matches the clear colour)
const PLACEHOLDER_TEXEL: [u8; 4] = [0x33, 0x33, 0x33, 0xff];

/// GPU copy of the current video frame.
///
/// Starts as a 1x1 placeholder. Uploads copy into the existing texture and
/// only reallocate when the video's intrinsic size changes; callers must
/// rebuild bind groups when `upload` reports a reallocation.
pub(crate) struct VideoTexture {
    texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    width: u32,
    height: u32,
    max_dimension: u32,
}

impl VideoTexture {
    pub(crate) fn new(device: &wgpu::Device, queue: &wgpu::Queue, max_dimension: u32) -> Self {
        let (texture, view) = allocate(device, 1, 1);
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &PLACEHOLDER_TEXEL,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        Self {
            texture,
            view,
            width: 1,
            height: 1,
            max_dimension,
        }
    }

    /// Copy the element's current frame. Returns true when the texture was
    /// reallocated.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        video: &web::HtmlVideoElement,
    ) -> bool {
        let (source_w, source_h) = (video.video_width(), video.video_height());
        if source_w == 0 || source_h == 0 {
            return false;
        }
        // Oversized sources are cropped to the device limit
        let (width, height) = fit_extent(source_w, source_h, self.max_dimension);
        let reallocated = (width, height) != (self.width, self.height);
        if reallocated {
            log::info!(
                "[gpu] video texture {}x{} -> {}x{}",
                self.width,
                self.height,
                width,
                height
            );
            if (width, height) != (source_w, source_h) {
                log::warn!(
                    "[gpu] video {}x{} exceeds the {} texture limit",
                    source_w,
                    source_h,
                    self.max_dimension
                );
            }
            let (texture, view) = allocate(device, width, height);
            self.texture = texture;
            self.view = view;
            self.width = width;
            self.height = height;
        }
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLVideoElement(video.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
        reallocated
    }
}

fn allocate(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    // External image copies require RENDER_ATTACHMENT on the destination.
    helpers::create_color_texture(
        device,
        "video_tex",
        width,
        height,
        VIDEO_FORMAT,
        wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
    )
}
