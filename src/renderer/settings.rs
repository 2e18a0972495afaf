/// Renderer configuration.
///
/// Defaults: high-performance adapter, vsync on, a transparent clear, and
/// a device-pixel-ratio cap of 2 to bound GPU cost on dense displays.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    pub power_preference: wgpu::PowerPreference,
    pub vsync: bool,
    pub clear_color: wgpu::Color,
    pub depth_format: wgpu::TextureFormat,
    /// Upper bound applied to the window's scale factor when sizing the
    /// surface.
    pub max_pixel_ratio: f32,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::HighPerformance,
            vsync: true,
            clear_color: wgpu::Color::TRANSPARENT,
            depth_format: wgpu::TextureFormat::Depth32Float,
            max_pixel_ratio: 2.0,
        }
    }
}
