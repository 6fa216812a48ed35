//! Main menu

use super::{SceneCtx, SceneId};
use crate::input::{InputEvent, Key};
use crate::renderer::{Color, DrawList, colors};
use crate::sim::Rect;

const BUTTON_WIDTH: f32 = 320.0;
const BUTTON_HEIGHT: f32 = 70.0;
const BUTTON_GAP: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Options,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::Options, MenuItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start",
            MenuItem::Options => "Options",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuScene {
    selected: usize,
}

impl MenuScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneCtx) {
        let Some(key) = event.fresh_press() else {
            return;
        };
        let count = MenuItem::ALL.len();
        match key {
            Key::Up | Key::W => self.selected = (self.selected + count - 1) % count,
            Key::Down | Key::S => self.selected = (self.selected + 1) % count,
            key if key.is_confirm() => match self.selected() {
                MenuItem::Start => ctx.request_scene(SceneId::Race),
                MenuItem::Options => ctx.request_scene(SceneId::Options),
                MenuItem::Quit => ctx.request_quit(),
            },
            _ => {}
        }
    }

    /// Selection highlight, 0..=1
    pub fn pulse(ticks_ms: u64) -> f32 {
        0.5 + 0.5 * (ticks_ms as f32 * 0.008).sin()
    }

    pub fn render(&self, draw: &mut DrawList, ctx: &SceneCtx) {
        let viewport = ctx.viewport();
        draw.clear(colors::MENU_BACKGROUND);

        let count = MenuItem::ALL.len() as f32;
        let total_h = count * BUTTON_HEIGHT + (count - 1.0) * BUTTON_GAP;
        let x = (viewport.width as f32 - BUTTON_WIDTH) * 0.5;
        let top = (viewport.height as f32 - total_h) * 0.5;
        let pulse = Self::pulse(ctx.ticks_ms());

        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let y = top + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            let button = Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT);
            let selected = i == self.selected;

            let fill = if selected {
                Color::rgb(80, (140.0 + 60.0 * pulse) as u8, 255)
            } else {
                colors::PANEL
            };
            draw.fill_rect(button, fill);
            draw.stroke_rect(button, colors::OUTLINE);
            draw.stroke_rect(button.inset(4.0), Color::rgba(12, 12, 16, 140));
            draw.text_centered(button, item.label(), colors::TEXT);

            if selected {
                let notch = Rect::new(button.x + 10.0, button.center().y - 6.0, 12.0, 12.0);
                draw.fill_rect(notch, colors::SHADE);
            }
        }
    }
}
