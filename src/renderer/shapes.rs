//! Shape generation for 2D primitives

use glam::{IVec2, Vec2};
use std::f32::consts::PI;

use super::surface::{Font, Surface};
use super::text::TextRun;
use super::vertex::{Color, Vertex};
use crate::sim::Rect;

/// Segments used to approximate an ellipse
const ELLIPSE_SEGMENTS: u32 = 32;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Color) -> [Vertex; 6] {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// A `Surface` that tessellates shapes into triangles for the GPU pipeline
/// and queues text for the overlay pass
#[derive(Debug, Default)]
pub struct ShapeBatch {
    size: (u32, u32),
    vertices: Vec<Vertex>,
    texts: Vec<TextRun>,
}

impl ShapeBatch {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            vertices: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Drop the previous frame's geometry and text, keeping the allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.texts.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }
}

impl Surface for ShapeBatch {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn fill_rect(&mut self, r: Rect, color: Color) {
        let verts = rect(
            r.origin().as_vec2(),
            Vec2::new(r.w as f32, r.h as f32),
            color,
        );
        self.vertices.extend_from_slice(&verts);
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let radii = Vec2::new(bounds.w as f32, bounds.h as f32) / 2.0;
        let center = bounds.origin().as_vec2() + radii;
        self.vertices
            .extend(ellipse(center, radii, color, ELLIPSE_SEGMENTS));
    }

    fn draw_text(&mut self, text: &str, origin: IVec2, font: Font, color: Color) {
        self.texts.push(TextRun {
            text: text.to_string(),
            origin,
            font,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 4.0), WHITE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 15.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 24.0);
    }

    #[test]
    fn test_ellipse_stays_in_bounds() {
        let verts = ellipse(Vec2::new(10.0, 10.0), Vec2::new(10.0, 5.0), WHITE, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            assert!(v.position[0] >= -0.001 && v.position[0] <= 20.001);
            assert!(v.position[1] >= 4.999 && v.position[1] <= 15.001);
        }
    }

    #[test]
    fn test_batch_records_and_clears() {
        let mut batch = ShapeBatch::new(640, 480);
        assert_eq!(batch.size(), (640, 480));

        batch.fill_rect(Rect::new(0, 0, 10, 10), WHITE);
        batch.fill_ellipse(Rect::new(0, 0, 20, 20), WHITE);
        batch.draw_text("Score: 1", IVec2::new(10, 10), Font::HUD, WHITE);
        assert_eq!(batch.vertices().len(), 6 + ELLIPSE_SEGMENTS as usize * 3);
        assert_eq!(
            batch.texts(),
            &[TextRun {
                text: "Score: 1".into(),
                origin: IVec2::new(10, 10),
                font: Font::HUD,
                color: WHITE,
            }]
        );

        batch.clear();
        assert!(batch.vertices().is_empty());
        assert!(batch.texts().is_empty());

        batch.resize(800, 600);
        assert_eq!(batch.size(), (800, 600));
    }
}
