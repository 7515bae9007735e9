use crate::core::{fit_extent, Camera, Orientation, Scene, CLEAR_RGB_LINEAR};
use web_sys as web;

mod helpers;
mod sphere;
mod video_texture;
use sphere::{create_sphere_resources, SphereResources, SphereUniforms};
use video_texture::VideoTexture;

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    sphere: SphereResources,
    video: VideoTexture,
    sampler: wgpu::Sampler,
    // References the current video texture view; rebuilt on reallocation
    bind_group: wgpu::BindGroup,

    camera: Camera,
    max_dimension: u32,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Acquire the canvas surface and upload the scene. The canvas backing
    /// store must already be sized.
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web avoid passing unknown fields to older WebGPU impls;
                    // only the texture size is raised to what the adapter offers
                    required_limits: wgpu::Limits {
                        max_texture_dimension_2d: adapter.limits().max_texture_dimension_2d,
                        ..wgpu::Limits::default()
                    },
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) = fit_extent(canvas.width(), canvas.height(), max_dimension);
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        let sphere = create_sphere_resources(&device, &scene.mesh, format);
        let video = VideoTexture::new(&device, &queue, max_dimension);
        let sampler = helpers::create_linear_sampler(&device);
        let bind_group = sphere.bind_group(&device, &video.view, &sampler);
        log::info!(
            "[gpu] sphere uploaded: {} vertices, {} triangles",
            scene.mesh.vertices.len(),
            scene.mesh.triangle_count()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            sphere,
            video,
            sampler,
            bind_group,
            camera: scene.camera.clone(),
            max_dimension,
            width,
            height,
            clear_color: helpers::clear_color(CLEAR_RGB_LINEAR),
        })
    }

    /// Point the camera using a solved orientation and apply lens settings.
    pub fn set_camera(&mut self, orientation: &Orientation, fov_deg: f32, width: u32, height: u32) {
        self.camera.apply(orientation);
        self.camera.set_fov(fov_deg);
        self.camera.set_viewport(width, height);
    }

    /// Copy the current video frame into the sphere texture.
    pub fn upload_video(&mut self, video: &web::HtmlVideoElement) {
        if self.video.upload(&self.device, &self.queue, video) {
            self.bind_group = self
                .sphere
                .bind_group(&self.device, &self.video.view, &self.sampler);
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = fit_extent(width, height, self.max_dimension);
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Clear and draw the sphere. Returns false when the frame was skipped.
    pub fn render(&mut self) -> anyhow::Result<bool> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.reconfigure();
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("[gpu] surface timeout; frame skipped");
                return Ok(false);
            }
            Err(e) => return Err(anyhow::anyhow!("surface error: {:?}", e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SphereUniforms {
            view_proj: self.camera.view_proj().to_cols_array_2d(),
        };
        self.queue.write_buffer(
            &self.sphere.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sphere_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.sphere.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.sphere.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.sphere.index_count, 0, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(true)
    }
}
