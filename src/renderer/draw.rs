//! Draw command recording
//!
//! Scenes never talk to a graphics API. They append commands to a
//! `DrawList`, which the platform rasterises and presents.

use glam::Vec2;

use crate::sim::Rect;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Normalized floats for vertex upload
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole target
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    /// 1px outline
    StrokeRect { rect: Rect, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    /// Text with its top-left corner at `pos`
    Text { pos: Vec2, text: String, color: Color },
    /// Text centered inside `bounds`
    TextCentered { bounds: Rect, text: String, color: Color },
}

/// Commands for one frame, in painter's order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands, keeping the allocation
    pub fn reset(&mut self) {
        self.cmds.clear();
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn clear(&mut self, color: Color) {
        self.cmds.push(DrawCmd::Clear(color));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::FillRect { rect, color });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::StrokeRect { rect, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.cmds.push(DrawCmd::Line { from, to, color });
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, color: Color) {
        self.cmds.push(DrawCmd::Text {
            pos,
            text: text.into(),
            color,
        });
    }

    pub fn text_centered(&mut self, bounds: Rect, text: impl Into<String>, color: Color) {
        self.cmds.push(DrawCmd::TextCentered {
            bounds,
            text: text.into(),
            color,
        });
    }

    /// All text strings in the list, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cmds.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } | DrawCmd::TextCentered { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::rgb(255, 0, 0).to_f32(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::rgba(0, 0, 0, 0).to_f32(), [0.0; 4]);
    }

    #[test]
    fn test_records_in_order_and_resets() {
        let mut list = DrawList::new();
        list.clear(Color::rgb(1, 2, 3));
        list.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(9, 9, 9));
        list.text(Vec2::ZERO, "hello", Color::rgb(255, 255, 255));
        assert_eq!(list.len(), 3);
        assert!(matches!(list.commands()[0], DrawCmd::Clear(_)));
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["hello"]);

        list.reset();
        assert!(list.is_empty());
    }
}
