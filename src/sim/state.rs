//! Race state and level progression
//!
//! Everything a race needs between frames lives in `RaceSim`. Per-frame
//! integration is in `tick`; this file owns construction, resets and the
//! confirm-driven transitions.

use rand_pcg::Pcg32;

use super::car::Car;
use super::level::{LevelConfig, level_config};
use super::obstacle::{Obstacle, Spawner};
use super::rng::LaneRng;
use super::road::Road;
use crate::Viewport;

/// Phase of the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaceState {
    /// Driving; the only state in which the world moves
    #[default]
    Racing,
    /// Target distance reached, waiting for confirm to start the next level
    LevelComplete,
    /// Crashed, waiting for confirm to retry the same level
    GameOver,
}

/// Complete racing simulation state
#[derive(Debug, Clone)]
pub struct RaceSim<R: LaneRng = Pcg32> {
    pub state: RaceState,
    /// Current level (1-based)
    pub level: u32,
    pub cfg: LevelConfig,
    /// Distance covered in this level (px)
    pub level_distance: f32,
    /// Cosmetic lane dash scroll, wraps at `MARKER_PERIOD`
    pub lane_marker_offset: f32,
    pub car: Car,
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub rng: R,
}

impl<R: LaneRng> RaceSim<R> {
    /// Start at level 1. An unknown viewport falls back to a default size for
    /// the initial car placement.
    pub fn new(viewport: Viewport, rng: R) -> Self {
        let cfg = level_config(1);
        let mut sim = Self {
            state: RaceState::Racing,
            level: 1,
            cfg,
            level_distance: 0.0,
            lane_marker_offset: 0.0,
            car: Car::default(),
            obstacles: Vec::new(),
            spawner: Spawner::default(),
            rng,
        };
        sim.start_level(1, viewport.or_fallback());
        sim
    }

    /// Road geometry for the current level
    pub fn road(&self, viewport_width: i32) -> Road {
        Road::new(&self.cfg, viewport_width)
    }

    /// Load `level` and wipe all progress
    pub fn start_level(&mut self, level: u32, viewport: Viewport) {
        self.level = level.max(1);
        self.cfg = level_config(self.level);
        self.car.tune_for_level(self.level, &self.cfg);
        self.reset_progress(viewport);
        log::info!(
            "Level {} start: {} lanes, road {:.0}px, target {:.0}",
            self.level,
            self.cfg.lanes,
            self.cfg.road_width,
            self.cfg.target_distance
        );
    }

    /// Clear obstacles, timers and distance; put the car back on the start line
    pub fn reset_progress(&mut self, viewport: Viewport) {
        self.obstacles.clear();
        self.spawner.reset();
        self.lane_marker_offset = 0.0;
        self.level_distance = 0.0;
        self.state = RaceState::Racing;
        let road = self.road(viewport.width);
        self.car.place_at_start(viewport, &road);
    }

    /// Handle the confirm action. Returns true if it caused a transition.
    pub fn confirm(&mut self, viewport: Viewport) -> bool {
        match self.state {
            RaceState::Racing => false,
            RaceState::LevelComplete => {
                self.start_level(self.level + 1, viewport);
                true
            }
            RaceState::GameOver => {
                self.start_level(self.level, viewport);
                true
            }
        }
    }

    /// Fraction of the level covered, 0..=1
    pub fn progress(&self) -> f32 {
        if self.cfg.target_distance > 0.0 {
            (self.level_distance / self.cfg.target_distance).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::rng::seeded;

    fn sim() -> RaceSim {
        RaceSim::new(Viewport::new(960, 540), seeded(5))
    }

    fn dirty(sim: &mut RaceSim) {
        sim.level_distance = 1234.0;
        sim.lane_marker_offset = 33.0;
        sim.car.speed = 500.0;
        sim.car.rect.x = 600.0;
        sim.spawner.timer = 0.4;
        sim.spawner.last_lane = Some(2);
        sim.spawner.last_spawn_y = Some(-66.0);
        sim.obstacles.push(Obstacle {
            rect: Rect::new(300.0, 100.0, 56.0, 56.0),
            lane: 1,
        });
    }

    #[test]
    fn test_new_starts_racing_level_one() {
        let sim = sim();
        assert_eq!(sim.state, RaceState::Racing);
        assert_eq!(sim.level, 1);
        assert_eq!(sim.cfg, level_config(1));
        assert!(sim.obstacles.is_empty());
        assert_eq!(sim.car.speed, 0.0);
    }

    #[test]
    fn test_unknown_viewport_uses_fallback() {
        let sim = RaceSim::new(Viewport::new(0, 0), seeded(5));
        assert_eq!(sim.car.rect.y, 540.0 - 82.0 - 48.0);
    }

    #[test]
    fn test_confirm_while_racing_is_noop() {
        let mut sim = sim();
        dirty(&mut sim);
        let before = (
            sim.level,
            sim.level_distance,
            sim.car.speed,
            sim.obstacles.clone(),
            sim.spawner.clone(),
        );

        assert!(!sim.confirm(Viewport::new(960, 540)));

        assert_eq!(sim.state, RaceState::Racing);
        assert_eq!(
            before,
            (
                sim.level,
                sim.level_distance,
                sim.car.speed,
                sim.obstacles.clone(),
                sim.spawner.clone(),
            )
        );
    }

    #[test]
    fn test_confirm_after_game_over_retries_same_level() {
        let mut sim = sim();
        sim.start_level(3, Viewport::new(960, 540));
        dirty(&mut sim);
        sim.state = RaceState::GameOver;

        assert!(sim.confirm(Viewport::new(960, 540)));

        assert_eq!(sim.state, RaceState::Racing);
        assert_eq!(sim.level, 3);
        assert!(sim.obstacles.is_empty());
        assert_eq!(sim.car.speed, 0.0);
        assert_eq!(sim.level_distance, 0.0);
        assert_eq!(sim.lane_marker_offset, 0.0);
        assert_eq!(sim.spawner, Spawner::default());
    }

    #[test]
    fn test_confirm_after_level_complete_advances() {
        let mut sim = sim();
        dirty(&mut sim);
        sim.state = RaceState::LevelComplete;

        assert!(sim.confirm(Viewport::new(960, 540)));

        assert_eq!(sim.state, RaceState::Racing);
        assert_eq!(sim.level, 2);
        assert_eq!(sim.cfg, level_config(2));
        assert_eq!(sim.car.max_speed, level_config(2).max_speed);
        assert!(sim.obstacles.is_empty());
        assert_eq!(sim.level_distance, 0.0);
    }

    #[test]
    fn test_reset_reclamps_car_to_narrower_road() {
        let mut sim = RaceSim::new(Viewport::new(400, 540), seeded(5));
        sim.start_level(20, Viewport::new(400, 540));
        let road = sim.road(400);
        assert!(sim.car.rect.x >= road.min_x());
        assert!(sim.car.rect.x <= road.max_x(sim.car.rect.w).max(road.min_x()));
    }

    #[test]
    fn test_progress_fraction() {
        let mut sim = sim();
        assert_eq!(sim.progress(), 0.0);
        sim.level_distance = sim.cfg.target_distance * 0.5;
        assert!((sim.progress() - 0.5).abs() < 1e-6);
        sim.level_distance = sim.cfg.target_distance * 2.0;
        assert_eq!(sim.progress(), 1.0);
    }
}
