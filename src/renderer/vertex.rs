//! Vertex format shared by the scene batch and the shape shader
//!
//! Shapes are tessellated in window pixels; `to_clip` maps them into clip
//! space right before upload, so a resize only changes the frame size.

use bytemuck::{Pod, Zeroable};

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// One corner of a filled triangle
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Buffer layout matching `vs_main` in `shader.wgsl`
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    /// Map a window-pixel vertex (origin top-left, y down) into clip space
    /// (-1 to 1, y up) for a frame of `size` pixels
    pub fn to_clip(self, size: (u32, u32)) -> Self {
        let w = size.0.max(1) as f32;
        let h = size.1.max(1) as f32;
        let [x, y] = self.position;
        Self::new(x / w * 2.0 - 1.0, 1.0 - y / h * 2.0, self.color)
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BRICK: Color = [0.0, 0.0, 1.0, 1.0];
    pub const BALL: Color = [1.0, 0.0, 0.0, 1.0];
    pub const PADDLE: Color = [0.0, 1.0, 0.0, 1.0];
    pub const SCORE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: Color = [1.0, 0.0, 0.0, 1.0];
    pub const PAUSED: Color = [1.0, 0.85, 0.2, 1.0];
}
