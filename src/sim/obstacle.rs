//! Obstacles and the timed, fairness-gated spawner

use super::level::LevelConfig;
use super::rect::Rect;
use super::rng::LaneRng;
use super::road::Road;
use crate::consts::*;

/// A block sitting in one lane. Plain value, owned only by the obstacle list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub lane: u32,
}

/// Top edge of the highest (smallest y) obstacle, if any
pub fn highest_top(obstacles: &[Obstacle]) -> Option<f32> {
    obstacles.iter().map(|o| o.rect.y).reduce(f32::min)
}

/// Scroll every obstacle toward the car by `distance` px
pub fn advance(obstacles: &mut [Obstacle], distance: f32) {
    for o in obstacles {
        o.rect.y += distance;
    }
}

/// Drop obstacles whose top edge passed `viewport_height + OBSTACLE_CULL_MARGIN`
pub fn sweep(obstacles: &mut Vec<Obstacle>, viewport_height: i32) {
    let limit = viewport_height as f32 + OBSTACLE_CULL_MARGIN;
    obstacles.retain(|o| o.rect.y <= limit);
}

/// Spawn timing and last-spawn bookkeeping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spawner {
    /// Seconds since the last spawn
    pub timer: f32,
    pub last_lane: Option<u32>,
    /// y of the last spawned obstacle at spawn time
    pub last_spawn_y: Option<f32>,
}

impl Spawner {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The newest obstacle must have scrolled past `min_gap_y` before another
    /// may appear
    pub fn gate_open(obstacles: &[Obstacle], min_gap_y: f32) -> bool {
        highest_top(obstacles).is_none_or(|top| top > min_gap_y)
    }

    /// Advance the timer and spawn one obstacle if both the interval and the
    /// fairness gate allow it
    pub fn tick<R: LaneRng>(
        &mut self,
        dt: f32,
        cfg: &LevelConfig,
        road: &Road,
        obstacles: &mut Vec<Obstacle>,
        rng: &mut R,
    ) -> Option<Obstacle> {
        self.timer += dt;

        if self.timer < cfg.spawn_interval || !Self::gate_open(obstacles, cfg.min_gap_y) {
            return None;
        }

        self.timer = 0.0;
        let obstacle = self.spawn(cfg, road, rng);
        obstacles.push(obstacle);
        Some(obstacle)
    }

    /// Pick a lane, leaning away from the previous one.
    ///
    /// With `LANE_REPEAT_AVOID_CHANCE`/10 odds the pick is resampled a few
    /// times while it matches the last lane; after that the repeat stands.
    pub fn choose_lane<R: LaneRng>(&self, lanes: u32, rng: &mut R) -> u32 {
        let lanes = lanes.max(1) as i32;
        let mut lane = rng.range_inclusive(0, lanes - 1);

        if let Some(last) = self.last_lane {
            let last = last as i32;
            if lanes > 1 && rng.range_inclusive(0, 9) < LANE_REPEAT_AVOID_CHANCE {
                let mut tries = 0;
                while lane == last && tries < LANE_RESAMPLE_TRIES {
                    lane = rng.range_inclusive(0, lanes - 1);
                    tries += 1;
                }
            }
        }

        lane as u32
    }

    fn spawn<R: LaneRng>(&mut self, cfg: &LevelConfig, road: &Road, rng: &mut R) -> Obstacle {
        let lane = self.choose_lane(cfg.lanes, rng);

        let mut rect = Rect::new(
            road.lane_center(lane) - cfg.obstacle_w * 0.5,
            -cfg.obstacle_h - OBSTACLE_SPAWN_OFFSET,
            cfg.obstacle_w,
            cfg.obstacle_h,
        );
        road.clamp(&mut rect);

        self.last_lane = Some(lane);
        self.last_spawn_y = Some(rect.y);
        log::debug!("Spawned obstacle in lane {} at x={:.1}", lane, rect.x);

        Obstacle { rect, lane }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::level_config;
    use crate::sim::rng::{SequenceRng, seeded};

    fn obstacle_at(y: f32) -> Obstacle {
        Obstacle {
            rect: Rect::new(300.0, y, 56.0, 56.0),
            lane: 0,
        }
    }

    #[test]
    fn test_gate_open_when_empty() {
        assert!(Spawner::gate_open(&[], 200.0));
    }

    #[test]
    fn test_gate_uses_highest_obstacle() {
        let obstacles = [obstacle_at(500.0), obstacle_at(150.0)];
        assert!(!Spawner::gate_open(&obstacles, 200.0));
        assert!(Spawner::gate_open(&obstacles, 100.0));
        // Exactly at the gap is still closed
        assert!(!Spawner::gate_open(&obstacles, 150.0));
    }

    #[test]
    fn test_waits_for_interval() {
        let cfg = level_config(1);
        let road = Road::new(&cfg, 960);
        let mut spawner = Spawner::default();
        let mut obstacles = Vec::new();
        let mut rng = seeded(1);

        assert!(spawner.tick(0.5, &cfg, &road, &mut obstacles, &mut rng).is_none());
        assert!(spawner.tick(0.3, &cfg, &road, &mut obstacles, &mut rng).is_none());
        assert!(spawner.tick(0.2, &cfg, &road, &mut obstacles, &mut rng).is_some());
        assert_eq!(obstacles.len(), 1);
        assert_eq!(spawner.timer, 0.0);
    }

    #[test]
    fn test_gate_blocks_but_timer_keeps_running() {
        let cfg = level_config(1);
        let road = Road::new(&cfg, 960);
        let mut spawner = Spawner::default();
        let mut obstacles = vec![obstacle_at(50.0)];
        let mut rng = seeded(1);

        assert!(spawner.tick(2.0, &cfg, &road, &mut obstacles, &mut rng).is_none());
        assert_eq!(spawner.timer, 2.0);

        obstacles[0].rect.y = cfg.min_gap_y + 1.0;
        assert!(spawner.tick(0.0, &cfg, &road, &mut obstacles, &mut rng).is_some());
    }

    #[test]
    fn test_spawn_is_lane_centered_above_view() {
        let cfg = level_config(1);
        let road = Road::new(&cfg, 960);
        let mut spawner = Spawner::default();
        let mut obstacles = Vec::new();
        let mut rng = SequenceRng::new([1]);

        let o = spawner
            .tick(1.0, &cfg, &road, &mut obstacles, &mut rng)
            .expect("spawn");
        assert_eq!(o.lane, 1);
        assert!((o.rect.center().x - road.lane_center(1)).abs() < 1e-3);
        assert_eq!(o.rect.y, -56.0 - 10.0);
        assert_eq!(spawner.last_lane, Some(1));
        assert_eq!(spawner.last_spawn_y, Some(-66.0));
    }

    #[test]
    fn test_edge_lanes_stay_inside_road() {
        let cfg = level_config(1);
        let road = Road::new(&cfg, 960);
        for lane in 0..cfg.lanes as i32 {
            let mut spawner = Spawner::default();
            let mut obstacles = Vec::new();
            let mut rng = SequenceRng::new([lane]);
            let o = spawner
                .tick(1.0, &cfg, &road, &mut obstacles, &mut rng)
                .expect("spawn");
            assert!(o.rect.x >= road.min_x());
            assert!(o.rect.x <= road.max_x(o.rect.w));
        }
    }

    #[test]
    fn test_avoids_previous_lane_when_biased() {
        let spawner = Spawner {
            last_lane: Some(2),
            ..Default::default()
        };
        // First pick repeats, bias roll 3 < 6 triggers resampling, second pick differs
        let mut rng = SequenceRng::new([2, 3, 2, 0]);
        assert_eq!(spawner.choose_lane(3, &mut rng), 0);
    }

    #[test]
    fn test_repeat_allowed_without_bias() {
        let spawner = Spawner {
            last_lane: Some(2),
            ..Default::default()
        };
        // Bias roll 8 >= 6: no resampling
        let mut rng = SequenceRng::new([2, 8, 0]);
        assert_eq!(spawner.choose_lane(3, &mut rng), 2);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_retry_budget_is_bounded() {
        let spawner = Spawner {
            last_lane: Some(1),
            ..Default::default()
        };
        // Initial pick + bias roll + 6 resamples, all landing on the old lane
        let mut rng = SequenceRng::new([1, 0, 1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(spawner.choose_lane(3, &mut rng), 1);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_single_lane_never_resamples() {
        let spawner = Spawner {
            last_lane: Some(0),
            ..Default::default()
        };
        let mut rng = SequenceRng::new([5, 5]);
        assert_eq!(spawner.choose_lane(1, &mut rng), 0);
        assert_eq!(rng.remaining(), 2);
    }

    #[test]
    fn test_sweep_removes_only_far_obstacles() {
        let mut obstacles = vec![obstacle_at(100.0), obstacle_at(660.0), obstacle_at(661.0)];
        sweep(&mut obstacles, 540);
        assert_eq!(obstacles.len(), 2);
        assert!(obstacles.iter().all(|o| o.rect.y <= 660.0));
    }

    #[test]
    fn test_advance_and_highest() {
        let mut obstacles = vec![obstacle_at(10.0), obstacle_at(-30.0)];
        advance(&mut obstacles, 15.0);
        assert_eq!(highest_top(&obstacles), Some(-15.0));
        assert_eq!(highest_top(&[]), None);
    }
}
