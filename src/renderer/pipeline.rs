//! Mesh pipeline
//!
//! One forward render pipeline for every mascot part, plus the uniform
//! block definitions shared with `shader.wgsl`. Layouts:
//!
//! - group 0: per-frame globals (view-projection, camera, lights)
//! - group 1: per-object data (model matrix, material)

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::scene::light::LightKind;
use crate::scene::{Camera, Light};

pub const MAX_POINT_LIGHTS: usize = 2;

/// GPU layout of one point light. Must match `PointLight` in the shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GpuPointLight {
    /// xyz = world position, w = range
    pub position: [f32; 4],
    /// rgb = color, a = intensity
    pub color: [f32; 4],
}

/// Per-frame uniform block. Must match `Globals` in the shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// rgb = ambient color, a = ambient intensity
    pub ambient: [f32; 4],
    pub lights: [GpuPointLight; MAX_POINT_LIGHTS],
}

impl GlobalUniforms {
    /// Packs the camera and the scene's lighting rig. The first ambient
    /// light and the first two point lights win; the widget never has more.
    #[must_use]
    pub fn pack(camera: &Camera, lights: &[Light]) -> Self {
        let mut out = Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            ..Default::default()
        };

        let mut point_slot = 0;
        for light in lights {
            match light.kind {
                LightKind::Ambient => {
                    out.ambient = light.color.extend(light.intensity).to_array();
                }
                LightKind::Point { position, range } => {
                    if point_slot < MAX_POINT_LIGHTS {
                        out.lights[point_slot] = GpuPointLight {
                            position: position.extend(range).to_array(),
                            color: light.color.extend(light.intensity).to_array(),
                        };
                        point_slot += 1;
                    }
                }
            }
        }
        out
    }
}

/// Per-object uniform block. Must match `Object` in the shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// rgb = emissive color, a = emissive intensity
    pub emissive: [f32; 4],
    /// x = metalness, y = roughness
    pub params: [f32; 4],
}

impl ObjectUniforms {
    #[must_use]
    pub fn new(
        model: Mat4,
        color: Vec4,
        emissive: Vec3,
        emissive_intensity: f32,
        metalness: f32,
        roughness: f32,
    ) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.to_array(),
            emissive: emissive.extend(emissive_intensity).to_array(),
            params: [metalness, roughness, 0.0, 0.0],
        }
    }
}

/// The forward mesh pipeline and its bind group layouts.
pub struct MeshPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub globals_layout: wgpu::BindGroupLayout,
    pub object_layout: wgpu::BindGroupLayout,
}

impl MeshPipeline {
    /// Vertex stride: position (3 floats) + normal (3 floats).
    pub const VERTEX_STRIDE: u64 = 6 * 4;

    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let shader_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mascot Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[uniform_entry(0)],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mascot Pipeline Layout"),
            bind_group_layouts: &[Some(&globals_layout), Some(&object_layout)],
            immediate_size: 0,
        });

        let vertex_buffers = [wgpu::VertexBufferLayout {
            array_stride: Self::VERTEX_STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mascot Render Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader_module,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader_module,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: Some(true),
                depth_compare: Some(wgpu::CompareFunction::Less),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            globals_layout,
            object_layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn globals_pack_picks_ambient_and_two_points() {
        let camera = Camera::new_perspective(50.0, 1.0, 0.1, 1000.0);
        let lights = vec![
            Light::new_ambient(Vec3::ONE, 0.6),
            Light::new_point(Vec3::X, 1.0, Vec3::new(5.0, 5.0, 5.0), 100.0),
            Light::new_point(Vec3::Y, 0.8, Vec3::new(-5.0, -5.0, 5.0), 100.0),
            Light::new_point(Vec3::Z, 0.5, Vec3::ZERO, 10.0),
        ];
        let globals = GlobalUniforms::pack(&camera, &lights);
        assert!((globals.ambient[3] - 0.6).abs() < 1e-6);
        assert!((globals.lights[0].color[3] - 1.0).abs() < 1e-6);
        assert!((globals.lights[1].color[3] - 0.8).abs() < 1e-6);
        // The third point light does not fit and is dropped.
        assert!((globals.lights[1].position[0] + 5.0).abs() < 1e-6);
    }

    #[test]
    fn uniform_blocks_have_expected_size() {
        assert_eq!(std::mem::size_of::<GlobalUniforms>(), 64 + 16 + 16 + 64);
        assert_eq!(std::mem::size_of::<ObjectUniforms>(), 64 + 16 + 16 + 16);
    }
}
