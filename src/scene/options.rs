//! Display options: fullscreen toggle and windowed resolution cycling

use super::SceneCtx;
use crate::input::{InputEvent, Key};
use crate::renderer::{DrawList, colors};
use crate::sim::Rect;

#[derive(Debug, Clone, Default)]
pub struct OptionsScene {
    /// Index into `Settings::resolutions` of the last applied size
    resolution_index: usize,
}

impl OptionsScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution_index(&self) -> usize {
        self.resolution_index
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneCtx) {
        match event.fresh_press() {
            Some(Key::F) => ctx.toggle_fullscreen(),
            Some(Key::R) => self.cycle_resolution(ctx),
            _ => {}
        }
    }

    fn cycle_resolution(&mut self, ctx: &mut SceneCtx) {
        let count = ctx.settings().resolutions.len();
        if count == 0 {
            return;
        }
        self.resolution_index = (self.resolution_index + 1) % count;
        let (w, h) = ctx.settings().resolutions[self.resolution_index];
        ctx.set_windowed_resolution(w, h);
    }

    pub fn render(&self, draw: &mut DrawList, ctx: &SceneCtx) {
        let viewport = ctx.viewport();
        let (w, h) = (viewport.width as f32, viewport.height as f32);
        draw.clear(colors::OPTIONS_BACKGROUND);

        let panel = Rect::new(w * 0.5 - 260.0, h * 0.5 - 170.0, 520.0, 340.0);
        draw.fill_rect(panel, colors::PANEL);
        draw.stroke_rect(panel, colors::ACCENT);

        let line = |y: f32, height: f32| Rect::new(panel.x, panel.y + y, panel.w, height);
        draw.text_centered(line(18.0, 44.0), "Options", colors::TEXT);

        let mode = if ctx.display().fullscreen {
            "Fullscreen: ON (F to toggle)"
        } else {
            "Fullscreen: OFF (F to toggle)"
        };
        draw.text_centered(line(86.0, 36.0), mode, colors::TEXT);
        draw.text_centered(
            line(132.0, 36.0),
            format!("Resolution: {}x{} (R to cycle)", viewport.width, viewport.height),
            colors::TEXT,
        );
        draw.text_centered(line(220.0, 80.0), "Press ESC to return to Menu", colors::TEXT);
    }
}
