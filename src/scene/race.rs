//! Race scene: feeds input into the simulation and draws it

use glam::Vec2;

use super::{SceneCtx, SceneSetup};
use crate::consts::MARKER_PERIOD;
use crate::input::{HeldKeys, InputAction, InputEvent};
use crate::renderer::{DrawList, colors};
use crate::sim::{self, DriveInput, RaceSim, RaceState, Rect, TickEvent};

const DASH_WIDTH: f32 = 6.0;
const DASH_LENGTH: f32 = 34.0;
/// Level progress strip along the bottom of the HUD panel
const PROGRESS_INSET: f32 = 14.0;
const PROGRESS_HEIGHT: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct RaceScene {
    sim: RaceSim,
}

impl RaceScene {
    pub fn new(setup: SceneSetup) -> Self {
        Self {
            sim: RaceSim::new(setup.viewport, sim::seeded(setup.seed)),
        }
    }

    pub fn sim(&self) -> &RaceSim {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut RaceSim {
        &mut self.sim
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneCtx) {
        let Some(key) = event.fresh_press() else {
            return;
        };
        if key.is_confirm() {
            self.sim.confirm(ctx.viewport().or_fallback());
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut SceneCtx) {
        let input = drive_input(ctx.held());
        match sim::tick(&mut self.sim, &input, dt, ctx.viewport()) {
            TickEvent::LevelComplete => log::info!(
                "Level {} complete ({:.0} / {:.0})",
                self.sim.level,
                self.sim.level_distance,
                self.sim.cfg.target_distance
            ),
            TickEvent::Crashed { lane } => log::info!(
                "Crashed into lane {} obstacle on level {} at {:.0}",
                lane,
                self.sim.level,
                self.sim.level_distance
            ),
            TickEvent::Spawned | TickEvent::None => {}
        }
    }

    pub fn render(&self, draw: &mut DrawList, ctx: &SceneCtx) {
        let viewport = ctx.viewport();
        let (w, h) = (viewport.width as f32, viewport.height as f32);
        let sim = &self.sim;
        let road = sim.road(viewport.width);

        draw.clear(colors::RACE_BACKGROUND);
        draw.fill_rect(Rect::new(road.left, 0.0, road.width, h), colors::ROAD);
        draw.line(Vec2::new(road.left, 0.0), Vec2::new(road.left, h), colors::ROAD_EDGE);
        draw.line(Vec2::new(road.right(), 0.0), Vec2::new(road.right(), h), colors::ROAD_EDGE);

        // Dashes between lanes, scrolling with the marker offset
        let lane_w = road.lane_width();
        for lane in 1..road.lanes {
            let x = road.left + lane_w * lane as f32;
            let mut y = -MARKER_PERIOD + sim.lane_marker_offset;
            while y < h + MARKER_PERIOD {
                let dash = Rect::new(x - DASH_WIDTH * 0.5, y, DASH_WIDTH, DASH_LENGTH);
                draw.fill_rect(dash, colors::LANE_MARKER);
                y += MARKER_PERIOD;
            }
        }

        for obstacle in &sim.obstacles {
            draw.fill_rect(obstacle.rect, colors::OBSTACLE);
        }

        let car = sim.car.rect;
        draw.fill_rect(car, colors::CAR);
        let windshield = Rect::new(car.x + 10.0, car.y + 12.0, car.w - 20.0, 18.0);
        draw.fill_rect(windshield, colors::WINDSHIELD);

        let hud = Rect::new(16.0, 12.0, 520.0, 44.0);
        draw.fill_rect(hud, colors::HUD_PANEL);
        draw.stroke_rect(hud, colors::HUD_BORDER);
        draw.text(
            Vec2::new(hud.x + 14.0, hud.y + 10.0),
            hud_text(sim),
            colors::TEXT,
        );
        draw.fill_rect(progress_bar(hud, sim.progress()), colors::ACCENT);

        if let Some((title, hint)) = overlay_text(sim.state) {
            let overlay = Rect::new((w - 520.0) * 0.5, (h - 220.0) * 0.5, 520.0, 220.0);
            draw.fill_rect(overlay, colors::SHADE);
            draw.stroke_rect(overlay, colors::ACCENT);
            draw.text(Vec2::new(overlay.x + 150.0, overlay.y + 50.0), title, colors::TEXT);
            draw.text(Vec2::new(overlay.x + 85.0, overlay.y + 130.0), hint, colors::TEXT);
        }
    }
}

fn drive_input(held: HeldKeys) -> DriveInput {
    DriveInput {
        left: held.is_down(InputAction::SteerLeft),
        right: held.is_down(InputAction::SteerRight),
        accelerate: held.is_down(InputAction::Accelerate),
        brake: held.is_down(InputAction::Brake),
    }
}

fn hud_text(sim: &RaceSim) -> String {
    format!(
        "Level {}   Distance: {} / {}",
        sim.level, sim.level_distance as i32, sim.cfg.target_distance as i32
    )
}

/// Filled part of the progress strip inside `hud`
fn progress_bar(hud: Rect, progress: f32) -> Rect {
    let full = hud.w - 2.0 * PROGRESS_INSET;
    Rect::new(
        hud.x + PROGRESS_INSET,
        hud.bottom() - PROGRESS_HEIGHT - 2.0,
        full * progress,
        PROGRESS_HEIGHT,
    )
}

fn overlay_text(state: RaceState) -> Option<(&'static str, &'static str)> {
    match state {
        RaceState::Racing => None,
        RaceState::GameOver => Some(("CRASHED!", "Press Enter to retry this level")),
        RaceState::LevelComplete => Some(("LEVEL COMPLETE!", "Press Enter to start next level")),
    }
}
