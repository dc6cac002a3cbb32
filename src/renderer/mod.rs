//! CPU-side frame geometry
//!
//! The core never draws. This module turns a `FrameView` into one flat
//! triangle list in canvas coordinates, in back-to-front order, that any
//! backend can upload as-is (`bytemuck::cast_slice`).

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{FrameView, Starfield};

/// Triangles for one frame
#[derive(Debug, Default, Clone)]
pub struct FrameMesh {
    pub vertices: Vec<Vertex>,
}

impl FrameMesh {
    /// Background, walls, rays, then the star on top
    pub fn build(view: &FrameView<'_>, starfield: &Starfield) -> Self {
        let mut vertices = shapes::starfield(&starfield.stars);
        for wall in view.boundaries {
            vertices.extend(shapes::boundary(wall));
        }
        vertices.extend(shapes::rays(view.origin, view.hits, view.canvas.width));
        vertices.extend(shapes::target(&view.target));
        Self { vertices }
    }

    /// Overlay screens only show the background
    pub fn background(starfield: &Starfield) -> Self {
        Self {
            vertices: shapes::starfield(&starfield.stars),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
