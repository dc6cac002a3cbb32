//! Shape generation for 2D primitives

use glam::{Mat2, Vec2};
use std::f32::consts::PI;

use super::vertex::{Vertex, colors, with_alpha};
use crate::map_clamped;
use crate::sim::{BackgroundStar, Boundary, RayHit, TargetView};

/// Star drawing: points and inner radius ratio
const STAR_POINTS: usize = 5;
const STAR_INNER_RATIO: f32 = 2.5;
const RAY_WIDTH: f32 = 1.5;

/// Push a thick line (quad of two triangles) from `p1` to `p2`
pub fn line(vertices: &mut Vec<Vertex>, p1: Vec2, p2: Vec2, width: f32, color: [f32; 4]) {
    let dir = (p2 - p1).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let v1a = p1 + perp;
    let v1b = p1 - perp;
    let v2a = p2 + perp;
    let v2b = p2 - perp;

    vertices.push(Vertex::new(v1a.x, v1a.y, color));
    vertices.push(Vertex::new(v1b.x, v1b.y, color));
    vertices.push(Vertex::new(v2a.x, v2a.y, color));

    vertices.push(Vertex::new(v2a.x, v2a.y, color));
    vertices.push(Vertex::new(v1b.x, v1b.y, color));
    vertices.push(Vertex::new(v2b.x, v2b.y, color));
}

/// Wall as three layered strokes: wide faint glow, body, thin bright core
pub fn boundary(wall: &Boundary) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(18);
    line(&mut vertices, wall.a(), wall.b(), 3.0, colors::WALL_GLOW);
    line(&mut vertices, wall.a(), wall.b(), 2.0, colors::WALL_BODY);
    line(&mut vertices, wall.a(), wall.b(), 1.0, colors::WALL_CORE);
    vertices
}

/// Ray alpha (0-255) fades with hit distance, from 200 at the emitter to 10 at half the canvas width
pub fn ray_alpha(distance: f32, canvas_width: f32) -> f32 {
    map_clamped(distance, 0.0, canvas_width / 2.0, 200.0, 10.0)
}

/// One line per ray that hit something; escaped rays are skipped
pub fn rays(origin: Vec2, hits: &[Option<RayHit>], canvas_width: f32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(hits.len() * 6);
    for hit in hits.iter().flatten() {
        let color = with_alpha(colors::RAY, ray_alpha(hit.distance, canvas_width));
        line(&mut vertices, origin, hit.point, RAY_WIDTH, color);
    }
    vertices
}

/// Filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Hollow circle
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = center + Vec2::from_angle(theta1) * inner_radius;
        let outer1 = center + Vec2::from_angle(theta1) * outer_radius;
        let inner2 = center + Vec2::from_angle(theta2) * inner_radius;
        let outer2 = center + Vec2::from_angle(theta2) * outer_radius;

        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Outline points of a five-pointed star, first point straight up
pub fn star_outline(center: Vec2, outer_radius: f32) -> Vec<Vec2> {
    let rotate = Mat2::from_angle(-PI / 2.0);
    (0..STAR_POINTS * 2)
        .map(|i| {
            let r = if i % 2 == 0 {
                outer_radius
            } else {
                outer_radius / STAR_INNER_RATIO
            };
            let angle = i as f32 / (STAR_POINTS * 2) as f32 * 2.0 * PI;
            center + rotate * (Vec2::from_angle(angle) * r)
        })
        .collect()
}

/// The hidden star: pulsing ring plus filled star. Empty when not visible.
pub fn target(star: &TargetView) -> Vec<Vertex> {
    if !star.visible {
        return Vec::new();
    }

    let ring_radius = star.visual_radius + star.pulse_size / 2.0;
    let ring_color = with_alpha(colors::STAR_RING, star.pulse_alpha);
    let mut vertices = ring(star.pos, ring_radius - 1.25, ring_radius + 1.25, ring_color, 32);

    // Fan from the center; the outline is star-convex around it
    let outline = star_outline(star.pos, star.visual_radius);
    for i in 0..outline.len() {
        let p1 = outline[i];
        let p2 = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(star.pos.x, star.pos.y, colors::STAR_FILL));
        vertices.push(Vertex::new(p1.x, p1.y, colors::STAR_FILL));
        vertices.push(Vertex::new(p2.x, p2.y, colors::STAR_FILL));
    }
    for i in 0..outline.len() {
        line(
            &mut vertices,
            outline[i],
            outline[(i + 1) % outline.len()],
            1.5,
            colors::STAR_OUTLINE,
        );
    }

    vertices
}

/// Background stars as small dots
pub fn starfield(stars: &[BackgroundStar]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(stars.len() * 18);
    for s in stars {
        let color = with_alpha(colors::BACKGROUND_STAR, s.alpha);
        vertices.extend(circle(s.pos, s.size / 2.0, color, 6));
    }
    vertices
}
