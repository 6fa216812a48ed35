//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::draw::Color;

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

    /// Bytes between consecutive vertices in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw bytes of a vertex slice, ready for a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const TEXT: Color = Color::rgb(230, 235, 245);
    pub const ACCENT: Color = Color::rgb(80, 180, 255);
    pub const OUTLINE: Color = Color::rgb(50, 60, 80);
    pub const PANEL: Color = Color::rgb(30, 34, 48);
    pub const SHADE: Color = Color::rgba(12, 12, 16, 220);

    pub const MENU_BACKGROUND: Color = Color::rgb(12, 12, 16);
    pub const OPTIONS_BACKGROUND: Color = Color::rgb(16, 12, 20);

    pub const RACE_BACKGROUND: Color = Color::rgb(10, 10, 14);
    pub const ROAD: Color = Color::rgb(26, 26, 32);
    pub const ROAD_EDGE: Color = Color::rgb(60, 60, 72);
    pub const LANE_MARKER: Color = Color::rgba(210, 210, 220, 220);
    pub const OBSTACLE: Color = Color::rgb(240, 90, 90);
    pub const CAR: Color = Color::rgb(80, 180, 255);
    pub const WINDSHIELD: Color = Color::rgba(10, 10, 14, 160);
    pub const HUD_PANEL: Color = Color::rgba(12, 12, 16, 180);
    pub const HUD_BORDER: Color = Color::rgba(60, 60, 72, 220);
}
