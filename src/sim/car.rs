//! The player's car: speed model and steering

use super::level::LevelConfig;
use super::rect::Rect;
use super::road::Road;
use crate::Viewport;
use crate::consts::*;

/// Driving intent for one frame, taken from the held-key snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub left: bool,
    pub right: bool,
    pub accelerate: bool,
    pub brake: bool,
}

impl DriveInput {
    /// -1 (left), 0, or 1 (right); opposing keys cancel
    pub fn steer_dir(&self) -> f32 {
        let mut dir = 0.0;
        if self.left {
            dir -= 1.0;
        }
        if self.right {
            dir += 1.0;
        }
        dir
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub rect: Rect,
    /// Forward speed (px/s), never negative
    pub speed: f32,
    pub max_speed: f32,
    pub accel: f32,
    pub brake: f32,
    /// Coasting deceleration (px/s²)
    pub friction: f32,
    /// Speed-scaled steering rate (px/s at full speed factor)
    pub steer: f32,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, CAR_WIDTH, CAR_HEIGHT),
            speed: 0.0,
            max_speed: 900.0,
            accel: CAR_BASE_ACCEL,
            brake: CAR_BRAKE,
            friction: CAR_FRICTION,
            steer: CAR_STEER,
        }
    }
}

impl Car {
    /// Apply level tuning. Acceleration grows a little per level, the rest of
    /// the handling stays constant.
    pub fn tune_for_level(&mut self, level: u32, cfg: &LevelConfig) {
        self.max_speed = cfg.max_speed;
        self.accel = CAR_BASE_ACCEL + CAR_ACCEL_PER_LEVEL * (level.max(1) - 1) as f32;
        self.brake = CAR_BRAKE;
        self.friction = CAR_FRICTION;
        self.steer = CAR_STEER;
    }

    /// Stop and move to the start line: centered, near the bottom, on the road
    pub fn place_at_start(&mut self, viewport: Viewport, road: &Road) {
        self.rect.w = CAR_WIDTH;
        self.rect.h = CAR_HEIGHT;
        self.rect.x = (viewport.width as f32 - self.rect.w) * 0.5;
        self.rect.y = viewport.height as f32 - self.rect.h - CAR_BOTTOM_MARGIN;
        self.speed = 0.0;
        road.clamp(&mut self.rect);
    }

    /// Throttle, brake or coast, then clamp to `[0, max_speed]`
    pub fn integrate_speed(&mut self, input: &DriveInput, dt: f32) {
        if input.accelerate {
            self.speed += self.accel * dt;
        } else if input.brake {
            self.speed -= self.brake * dt;
        } else if self.speed > 0.0 {
            self.speed = (self.speed - self.friction * dt).max(0.0);
        }
        self.speed = self.speed.min(self.max_speed).max(0.0);
    }

    /// Fraction of top speed, used to make steering sharper when fast
    pub fn speed_factor(&self) -> f32 {
        if self.max_speed > 1.0 {
            self.speed / self.max_speed
        } else {
            0.0
        }
    }

    /// Lateral speed (px/s) when steering
    pub fn steer_rate(&self) -> f32 {
        STEER_BASE + self.steer * (STEER_MIN_FACTOR + (1.0 - STEER_MIN_FACTOR) * self.speed_factor())
    }

    /// Move sideways and stay on the road
    pub fn steer(&mut self, input: &DriveInput, dt: f32, road: &Road) {
        self.rect.x += input.steer_dir() * self.steer_rate() * dt;
        road.clamp(&mut self.rect);
    }
}
