//! Per-frame race update
//!
//! Order within a racing frame: speed, steering, lane-marker scroll,
//! obstacle scroll and sweep, spawning, distance, completion, collision.
//! Completion is checked before collision, so a frame that does both ends
//! the level instead of the run.
//!
//! Leaving Racing sets the car's speed to zero; it is not held at its last
//! value.

use super::car::DriveInput;
use super::obstacle::{self, Obstacle};
use super::rect::Rect;
use super::rng::LaneRng;
use super::state::{RaceSim, RaceState};
use crate::Viewport;
use crate::consts::{MARKER_PERIOD, MAX_FRAME_DT};

/// What happened during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickEvent {
    /// Nothing noteworthy (includes skipped frames)
    #[default]
    None,
    Spawned,
    LevelComplete,
    /// Ran into an obstacle in `lane`
    Crashed { lane: u32 },
}

/// Advance the race by `dt` seconds
pub fn tick<R: LaneRng>(
    sim: &mut RaceSim<R>,
    input: &DriveInput,
    dt: f32,
    viewport: Viewport,
) -> TickEvent {
    if !viewport.is_known() {
        return TickEvent::None;
    }

    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    // World is frozen outside of Racing
    if sim.state != RaceState::Racing {
        return TickEvent::None;
    }

    let road = sim.road(viewport.width);

    sim.car.integrate_speed(input, dt);
    sim.car.steer(input, dt, &road);

    let travelled = sim.car.speed * dt;

    sim.lane_marker_offset += travelled;
    if sim.lane_marker_offset >= MARKER_PERIOD {
        sim.lane_marker_offset %= MARKER_PERIOD;
    }

    obstacle::advance(&mut sim.obstacles, travelled);
    obstacle::sweep(&mut sim.obstacles, viewport.height);

    let spawned = sim
        .spawner
        .tick(dt, &sim.cfg, &road, &mut sim.obstacles, &mut sim.rng)
        .is_some();

    sim.level_distance += travelled;
    if sim.level_distance >= sim.cfg.target_distance {
        sim.state = RaceState::LevelComplete;
        sim.car.speed = 0.0;
        return TickEvent::LevelComplete;
    }

    if let Some(hit) = first_hit(&sim.car.rect, &sim.obstacles) {
        let lane = hit.lane;
        sim.state = RaceState::GameOver;
        sim.car.speed = 0.0;
        return TickEvent::Crashed { lane };
    }

    if spawned {
        TickEvent::Spawned
    } else {
        TickEvent::None
    }
}

/// First obstacle overlapping `car`, in list order
pub fn first_hit<'a>(car: &Rect, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| o.rect.overlaps(car))
}
