//! Vertex type for the backdrop

use bytemuck::{Pod, Zeroable};

/// Clip-space 2D vertex with an RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for backdrop elements
pub mod colors {
    /// 0xRRGGBB plus alpha as normalized floats
    pub const fn rgba(hex: u32, alpha: f32) -> [f32; 4] {
        [
            ((hex >> 16) & 0xFF) as f32 / 255.0,
            ((hex >> 8) & 0xFF) as f32 / 255.0,
            (hex & 0xFF) as f32 / 255.0,
            alpha,
        ]
    }

    pub const SKY_PLANE: [f32; 4] = rgba(0x87CEEB, 0.3);
    pub const CLOUD: [f32; 4] = rgba(0xFFFFFF, 0.6);
}

#[cfg(test)]
mod tests {
    use super::colors::*;

    #[test]
    fn test_rgba_unpacks_channels() {
        assert_eq!(rgba(0xFFFFFF, 0.6), [1.0, 1.0, 1.0, 0.6]);
        assert_eq!(rgba(0x000000, 1.0), [0.0, 0.0, 0.0, 1.0]);
        let sky = SKY_PLANE;
        assert!((sky[0] - 135.0 / 255.0).abs() < 1e-6);
        assert!((sky[1] - 206.0 / 255.0).abs() < 1e-6);
        assert!((sky[2] - 235.0 / 255.0).abs() < 1e-6);
        assert_eq!(sky[3], 0.3);
    }
}
