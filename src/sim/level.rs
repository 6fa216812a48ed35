//! Per-level tuning
//!
//! A level index maps to a fixed bundle of tuning values. The mapping is a
//! pure formula: every field moves monotonically with the level and the
//! scaled ones stop at a cap or floor.

/// Lane count steps up at these levels
pub const FOUR_LANE_LEVEL: u32 = 4;
pub const FIVE_LANE_LEVEL: u32 = 8;

pub const ROAD_WIDTH_START: f32 = 560.0;
pub const ROAD_WIDTH_STEP: f32 = 10.0;
pub const ROAD_WIDTH_MIN: f32 = 420.0;

pub const TARGET_DISTANCE_START: f32 = 4200.0;
pub const TARGET_DISTANCE_STEP: f32 = 900.0;

pub const MAX_SPEED_START: f32 = 900.0;
pub const MAX_SPEED_STEP: f32 = 70.0;
pub const MAX_SPEED_CAP: f32 = 1450.0;

pub const SPAWN_INTERVAL_START: f32 = 0.90;
pub const SPAWN_INTERVAL_STEP: f32 = 0.05;
pub const SPAWN_INTERVAL_MIN: f32 = 0.42;

/// Reaction window in pixels: base + span * min(max_speed / reference, cap)
pub const MIN_GAP_BASE: f32 = 140.0;
pub const MIN_GAP_SPAN: f32 = 90.0;
pub const MIN_GAP_SPEED_REF: f32 = 1200.0;
pub const MIN_GAP_SPEED_FACTOR_CAP: f32 = 1.3;

pub const OBSTACLE_SIZE_START: f32 = 56.0;
pub const OBSTACLE_SIZE_STEP: f32 = 2.0;
pub const OBSTACLE_SIZE_CAP: f32 = 72.0;

/// Tuning for one level; recomputed on every level transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub lanes: u32,
    pub road_width: f32,
    /// Distance to cover to finish the level (px)
    pub target_distance: f32,
    /// Car top speed (px/s)
    pub max_speed: f32,
    /// Seconds between spawn attempts
    pub spawn_interval: f32,
    /// Minimum vertical gap the newest obstacle must open before another spawns
    pub min_gap_y: f32,
    pub obstacle_w: f32,
    pub obstacle_h: f32,
}

/// Tuning for `level` (levels below 1 are treated as 1)
pub fn level_config(level: u32) -> LevelConfig {
    let level = level.max(1);
    let step = (level - 1) as f32;

    let lanes = if level < FOUR_LANE_LEVEL {
        3
    } else if level < FIVE_LANE_LEVEL {
        4
    } else {
        5
    };

    let max_speed = (MAX_SPEED_START + MAX_SPEED_STEP * step).min(MAX_SPEED_CAP);
    let speed_factor = (max_speed / MIN_GAP_SPEED_REF).min(MIN_GAP_SPEED_FACTOR_CAP);
    let obstacle_size = (OBSTACLE_SIZE_START + OBSTACLE_SIZE_STEP * step).min(OBSTACLE_SIZE_CAP);

    LevelConfig {
        lanes,
        road_width: (ROAD_WIDTH_START - ROAD_WIDTH_STEP * step).max(ROAD_WIDTH_MIN),
        target_distance: TARGET_DISTANCE_START + TARGET_DISTANCE_STEP * step,
        max_speed,
        spawn_interval: (SPAWN_INTERVAL_START - SPAWN_INTERVAL_STEP * step).max(SPAWN_INTERVAL_MIN),
        min_gap_y: MIN_GAP_BASE + MIN_GAP_SPAN * speed_factor,
        obstacle_w: obstacle_size,
        obstacle_h: obstacle_size,
    }
}
