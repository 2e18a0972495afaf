//! wgpu forward renderer
//!
//! Small single-pass renderer for the mascot scene. Geometry buffers are
//! uploaded on first use and cached per geometry handle; each mesh node
//! gets a cached uniform buffer + bind group that is rewritten every frame.
//!
//! Mid-life surface failures are not retried beyond a reconfigure: the
//! widget is decorative, a skipped frame is acceptable.

pub mod context;
pub mod pipeline;
pub mod settings;

use rustc_hash::FxHashMap;
use wgpu::util::DeviceExt;

use crate::assets::{AssetStore, GeometryHandle};
use crate::errors::Result;
use crate::scene::{NodeHandle, Scene};

pub use context::WgpuContext;
pub use pipeline::MeshPipeline;
pub use settings::RendererSettings;

use pipeline::{GlobalUniforms, ObjectUniforms};
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};

struct GpuGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

struct GpuObject {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct GlobalsBinding {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// The rendering subsystem.
///
/// Created cheaply with [`Renderer::new`]; GPU resources exist only
/// between [`init`](Renderer::init) and [`release`](Renderer::release).
pub struct Renderer {
    settings: RendererSettings,

    context: Option<WgpuContext>,
    mesh_pipeline: Option<MeshPipeline>,
    globals: Option<GlobalsBinding>,

    geometries: FxHashMap<GeometryHandle, GpuGeometry>,
    objects: FxHashMap<NodeHandle, GpuObject>,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            context: None,
            mesh_pipeline: None,
            globals: None,
            geometries: FxHashMap::default(),
            objects: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Acquires the GPU context and builds the pipeline.
    ///
    /// Fatal on failure: the caller must not use the widget afterwards.
    pub async fn init<W>(&mut self, window: W, width: u32, height: u32) -> Result<()>
    where
        W: HasWindowHandle + HasDisplayHandle + Send + Sync + 'static,
    {
        let context = WgpuContext::new(window, &self.settings, width, height).await?;

        let mesh_pipeline = MeshPipeline::new(
            &context.device,
            context.color_format(),
            context.depth_format,
        );

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Uniform Buffer"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = context.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &mesh_pipeline.globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.globals = Some(GlobalsBinding {
            uniform_buffer,
            bind_group,
        });
        self.mesh_pipeline = Some(mesh_pipeline);
        self.context = Some(context);

        log::info!("Renderer initialized ({width}x{height})");
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// Current surface size in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.context.as_ref().map_or((0, 0), WgpuContext::size)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(context) = &mut self.context {
            context.resize(width, height);
        }
    }

    /// Renders the scene. Returns whether a frame was presented.
    ///
    /// Surface loss reconfigures and skips the frame; any other acquisition
    /// failure just skips the frame.
    pub fn render(&mut self, scene: &Scene, assets: &AssetStore) -> bool {
        let (Some(context), Some(mesh_pipeline), Some(globals)) =
            (&mut self.context, &self.mesh_pipeline, &self.globals)
        else {
            return false;
        };

        let frame = match context.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(frame)
            | wgpu::CurrentSurfaceTexture::Suboptimal(frame) => frame,
            wgpu::CurrentSurfaceTexture::Lost | wgpu::CurrentSurfaceTexture::Outdated => {
                context.reconfigure();
                return false;
            }
            other => {
                log::warn!("Skipping frame: {other:?}");
                return false;
            }
        };
        let color_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let global_uniforms = GlobalUniforms::pack(&scene.camera, &scene.lights);
        context.queue.write_buffer(
            &globals.uniform_buffer,
            0,
            bytemuck::bytes_of(&global_uniforms),
        );

        // Upload geometry and refresh per-object uniforms before the pass.
        let mut draws: Vec<NodeHandle> = Vec::with_capacity(scene.meshes.len());
        for (node_handle, mesh) in &scene.meshes {
            let Some(node) = scene.get_node(node_handle) else {
                continue;
            };
            if !node.visible {
                continue;
            }
            let (Some(geometry), Some(material)) = (
                assets.get_geometry(mesh.geometry),
                assets.get_material(mesh.material),
            ) else {
                continue;
            };

            self.geometries.entry(mesh.geometry).or_insert_with(|| {
                let vertices = geometry.interleaved_vertices();
                let vertex_buffer =
                    context
                        .device
                        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("Mascot Vertex Buffer"),
                            contents: bytemuck::cast_slice(&vertices),
                            usage: wgpu::BufferUsages::VERTEX,
                        });
                let index_buffer =
                    context
                        .device
                        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                            label: Some("Mascot Index Buffer"),
                            contents: bytemuck::cast_slice(&geometry.indices),
                            usage: wgpu::BufferUsages::INDEX,
                        });
                GpuGeometry {
                    vertex_buffer,
                    index_buffer,
                    index_count: geometry.index_count(),
                }
            });

            let object = self.objects.entry(node_handle).or_insert_with(|| {
                let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("Object Uniform Buffer"),
                    size: std::mem::size_of::<ObjectUniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Object Bind Group"),
                    layout: &mesh_pipeline.object_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                GpuObject {
                    uniform_buffer,
                    bind_group,
                }
            });

            let uniforms = ObjectUniforms::new(
                node.transform.world_matrix_as_mat4(),
                material.color,
                material.emissive,
                material.emissive_intensity,
                material.metalness,
                material.roughness,
            );
            context
                .queue
                .write_buffer(&object.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

            draws.push(node_handle);
        }

        // Evict cache entries whose node or geometry went away since the
        // last frame, so removed meshes do not pin GPU buffers until
        // release().
        self.objects
            .retain(|&handle, _| scene.meshes.contains_key(handle));
        self.geometries
            .retain(|&handle, _| assets.get_geometry(handle).is_some());

        let clear_color = scene.background.map_or(self.settings.clear_color, |bg| {
            wgpu::Color {
                r: f64::from(bg.x),
                g: f64::from(bg.y),
                b: f64::from(bg.z),
                a: f64::from(bg.w),
            }
        });

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Mascot Frame Encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Mascot Forward Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &context.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&mesh_pipeline.pipeline);
            pass.set_bind_group(0, &globals.bind_group, &[]);

            for node_handle in draws {
                let Some(mesh) = scene.meshes.get(node_handle) else {
                    continue;
                };
                let (Some(gpu_geometry), Some(gpu_object)) = (
                    self.geometries.get(&mesh.geometry),
                    self.objects.get(&node_handle),
                ) else {
                    continue;
                };

                pass.set_bind_group(1, &gpu_object.bind_group, &[]);
                pass.set_vertex_buffer(0, gpu_geometry.vertex_buffer.slice(..));
                pass.set_index_buffer(
                    gpu_geometry.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint16,
                );
                pass.draw_indexed(0..gpu_geometry.index_count, 0, 0..1);
            }
        }

        context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        true
    }

    /// Drops every GPU resource and detaches from the surface. Idempotent.
    pub fn release(&mut self) {
        self.geometries.clear();
        self.objects.clear();
        self.globals = None;
        self.mesh_pipeline = None;
        if self.context.take().is_some() {
            log::info!("Renderer released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    #[test]
    fn render_without_init_skips_the_frame() {
        let mut renderer = Renderer::new(RendererSettings::default());
        let scene = Scene::new();
        let assets = AssetStore::new();

        assert!(!renderer.is_initialized());
        assert!(!renderer.render(&scene, &assets));
        assert_eq!(renderer.size(), (0, 0));

        renderer.release();
        renderer.release();
    }
}
