//! Shape generation for 2D primitives
//!
//! Turns the geometric part of a `DrawList` into triangle lists. Text
//! commands produce no geometry; glyphs are the platform's job.

use glam::Vec2;

use super::draw::{Color, DrawCmd, DrawList};
use super::vertex::Vertex;
use crate::Viewport;
use crate::sim::Rect;

/// Outline and line thickness in pixels
pub const LINE_WIDTH: f32 = 1.0;

/// Two triangles covering `rect`
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(&mut vertices, rect.min(), rect.max(), color);
    vertices
}

/// Four thin quads along the edges of `rect`
pub fn outlined_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    let (min, max) = (rect.min(), rect.max());
    let t = LINE_WIDTH;

    // Top and bottom span the full width, sides fill the gap between them
    push_quad(&mut vertices, min, Vec2::new(max.x, min.y + t), color);
    push_quad(&mut vertices, Vec2::new(min.x, max.y - t), max, color);
    push_quad(&mut vertices, Vec2::new(min.x, min.y + t), Vec2::new(min.x + t, max.y - t), color);
    push_quad(&mut vertices, Vec2::new(max.x - t, min.y + t), Vec2::new(max.x, max.y - t), color);

    vertices
}

/// A `LINE_WIDTH` wide quad from `from` to `to`
pub fn line(from: Vec2, to: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (LINE_WIDTH * 0.5);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Triangles for every geometric command, in painter's order
pub fn tessellate(list: &DrawList, viewport: Viewport) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 6);
    let screen = Rect::new(0.0, 0.0, viewport.width.max(0) as f32, viewport.height.max(0) as f32);

    for cmd in list.commands() {
        match cmd {
            DrawCmd::Clear(color) => vertices.extend(filled_rect(&screen, rgba(*color))),
            DrawCmd::FillRect { rect, color } => vertices.extend(filled_rect(rect, rgba(*color))),
            DrawCmd::StrokeRect { rect, color } => {
                vertices.extend(outlined_rect(rect, rgba(*color)))
            }
            DrawCmd::Line { from, to, color } => vertices.extend(line(*from, *to, rgba(*color))),
            DrawCmd::Text { .. } | DrawCmd::TextCentered { .. } => {}
        }
    }

    vertices
}

#[inline]
fn rgba(color: Color) -> [f32; 4] {
    color.to_f32()
}

fn push_quad(vertices: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    vertices.push(Vertex::new(min.x, min.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(min.x, max.y, color));

    vertices.push(Vertex::new(min.x, max.y, color));
    vertices.push(Vertex::new(max.x, min.y, color));
    vertices.push(Vertex::new(max.x, max.y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect_covers_corners() {
        let verts = filled_rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_outline_has_four_edges() {
        let verts = outlined_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), [1.0; 4]);
        assert_eq!(verts.len(), 24);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, [1.0; 4]).is_empty());
        assert_eq!(line(Vec2::ZERO, Vec2::new(0.0, 5.0), [1.0; 4]).len(), 6);
    }

    #[test]
    fn test_tessellate_skips_text() {
        let mut list = DrawList::new();
        list.clear(Color::rgb(0, 0, 0));
        list.text(Vec2::ZERO, "HUD", Color::rgb(255, 255, 255));
        list.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::rgb(255, 0, 0));
        let verts = tessellate(&list, Viewport::new(100, 50));
        assert_eq!(verts.len(), 6 + 24);
        // Clear spans the viewport
        assert_eq!(verts[5].position, [100.0, 50.0]);
    }
}
