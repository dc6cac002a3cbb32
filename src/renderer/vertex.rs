//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

    /// Byte stride of one vertex in an interleaved buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Color from 0-255 channels
pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0]
}

/// Same color with a new alpha (0-255 scale)
pub fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], (alpha / 255.0).clamp(0.0, 1.0)]
}

/// Colors for game elements
pub mod colors {
    use super::rgba8;

    pub const BACKGROUND: [f32; 4] = rgba8(0, 0, 10, 255);
    pub const BACKGROUND_STAR: [f32; 4] = rgba8(255, 255, 255, 255);
    /// Wall strokes, outermost glow first
    pub const WALL_GLOW: [f32; 4] = rgba8(150, 0, 255, 50);
    pub const WALL_BODY: [f32; 4] = rgba8(200, 50, 255, 150);
    pub const WALL_CORE: [f32; 4] = rgba8(255, 200, 255, 200);
    pub const RAY: [f32; 4] = rgba8(255, 255, 150, 255);
    pub const STAR_RING: [f32; 4] = rgba8(255, 223, 0, 255);
    pub const STAR_FILL: [f32; 4] = rgba8(255, 223, 0, 255);
    pub const STAR_OUTLINE: [f32; 4] = rgba8(255, 180, 0, 255);
}
