//! Board presentation on the canvas
//!
//! One triangle-list pipeline. Scene vertices arrive in board pixels and are
//! mapped to clip space on upload; the vertex buffer is kept between frames
//! and only reallocated when a longer snake needs more room.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::{BOARD_HEIGHT_PX, BOARD_WIDTH_PX};

/// Vertices the buffer starts with: board, a short snake, a couple of food
const INITIAL_VERTEX_CAPACITY: usize = 1024;

pub struct RenderState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Room in `vertex_buffer`, in vertices
    vertex_capacity: usize,
    vertex_count: u32,
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("canvas-snake-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: board_format(&caps.formats),
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: board_alpha_mode(&caps.alpha_modes),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "Surface {}x{} as {:?} ({:?})",
            config.width,
            config.height,
            config.format,
            config.alpha_mode
        );

        let pipeline = board_pipeline(&device, config.format);
        let vertex_buffer = vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertex_count: 0,
        })
    }

    /// Backing store size in device pixels
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Upload a scene in board pixels and present it
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        self.upload(vertices);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("board_encoder"),
            });

        let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("board_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r, g, b, a }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if self.vertex_count > 0 {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..self.vertex_count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn upload(&mut self, vertices: &[Vertex]) {
        let capacity = grown_capacity(self.vertex_capacity, vertices.len());
        if capacity != self.vertex_capacity {
            log::debug!("Vertex buffer {} -> {} vertices", self.vertex_capacity, capacity);
            self.vertex_buffer = vertex_buffer(&self.device, capacity);
            self.vertex_capacity = capacity;
        }

        let clip: Vec<Vertex> = vertices.iter().map(to_clip_space).collect();
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&clip));
        self.vertex_count = clip.len() as u32;
    }
}

fn board_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("board_shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("board_layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("board_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            // Later shapes simply cover earlier ones
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

fn vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("board_vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Buffer size (in vertices) able to hold `needed`, doubling from `current`
fn grown_capacity(current: usize, needed: usize) -> usize {
    if needed <= current {
        current
    } else {
        needed.next_power_of_two().max(current * 2)
    }
}

/// Colours are authored as 8-bit sRGB values, so prefer a format that
/// writes them through unchanged
fn board_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
        .unwrap_or(wgpu::TextureFormat::Bgra8Unorm)
}

fn board_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

fn to_clip_space(v: &Vertex) -> Vertex {
    let ndc = board_to_ndc(Vec2::from(v.position));
    Vertex::new(ndc.x, ndc.y, v.color)
}

/// Convert board pixels (origin top-left, y down) to normalized device
/// coordinates (-1..1, y up)
pub fn board_to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x / BOARD_WIDTH_PX * 2.0 - 1.0,
        1.0 - p.y / BOARD_HEIGHT_PX * 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    #[test]
    fn test_board_corners_to_ndc() {
        assert_eq!(board_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(
            board_to_ndc(Vec2::new(BOARD_WIDTH_PX, BOARD_HEIGHT_PX)),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(
            board_to_ndc(Vec2::new(BOARD_WIDTH_PX / 2.0, BOARD_HEIGHT_PX / 2.0)),
            Vec2::ZERO
        );
    }

    #[test]
    fn test_clip_space_keeps_colour() {
        let v = Vertex::new(0.0, BOARD_HEIGHT_PX, colors::FOOD_PREMIUM);
        let clip = to_clip_space(&v);
        assert_eq!(clip.position, [-1.0, -1.0]);
        assert_eq!(clip.color, colors::FOOD_PREMIUM);
    }

    #[test]
    fn test_prefers_linear_format() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(board_format(&formats), TextureFormat::Bgra8Unorm);
        assert_eq!(
            board_format(&[TextureFormat::Rgba8UnormSrgb]),
            TextureFormat::Rgba8UnormSrgb
        );
        assert_eq!(board_format(&[]), TextureFormat::Bgra8Unorm);
    }

    #[test]
    fn test_prefers_opaque_alpha() {
        let modes = [CompositeAlphaMode::PreMultiplied, CompositeAlphaMode::Opaque];
        assert_eq!(board_alpha_mode(&modes), CompositeAlphaMode::Opaque);
        assert_eq!(
            board_alpha_mode(&[CompositeAlphaMode::PreMultiplied]),
            CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn test_buffer_grows_only_when_needed() {
        assert_eq!(grown_capacity(1024, 600), 1024);
        assert_eq!(grown_capacity(1024, 1024), 1024);
        assert_eq!(grown_capacity(1024, 1025), 2048);
        assert_eq!(grown_capacity(1024, 5000), 8192);
    }
}
