//! Lane Rush - A top-down lane racing arcade game
//!
//! Core modules:
//! - `game`: Frame loop and scene lifecycle orchestration
//! - `scene`: Menu, options and race scenes behind one dispatch point
//! - `sim`: Racing simulation (physics, spawning, level tuning, collisions)
//! - `renderer`: Draw command recording and triangle tessellation
//! - `platform`: Window/input/clock abstraction plus a headless backend
//! - `settings`: Data-driven startup configuration

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest simulation step; longer frames are clamped to this
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Viewport used for initial placement when the real size is unknown
    pub const FALLBACK_VIEWPORT: (i32, i32) = (960, 540);

    /// Shoulder padding between road edge and anything on it
    pub const ROAD_PADDING: f32 = 10.0;

    /// Car body dimensions
    pub const CAR_WIDTH: f32 = 52.0;
    pub const CAR_HEIGHT: f32 = 82.0;
    /// Gap between car bottom and viewport bottom at the start line
    pub const CAR_BOTTOM_MARGIN: f32 = 48.0;

    /// Car feel (px/s and px/s²)
    pub const CAR_BASE_ACCEL: f32 = 900.0;
    pub const CAR_ACCEL_PER_LEVEL: f32 = 20.0;
    pub const CAR_BRAKE: f32 = 1400.0;
    pub const CAR_FRICTION: f32 = 650.0;
    pub const CAR_STEER: f32 = 520.0;
    /// Lateral speed the car always gets when steering
    pub const STEER_BASE: f32 = 200.0;
    /// Portion of `CAR_STEER` granted at standstill; the rest scales with speed
    pub const STEER_MIN_FACTOR: f32 = 0.35;

    /// Lane marker dash spacing
    pub const MARKER_PERIOD: f32 = 80.0;

    /// Obstacles are dropped once their top edge passes viewport bottom + this
    pub const OBSTACLE_CULL_MARGIN: f32 = 120.0;
    /// Obstacles appear this far above the top of the viewport
    pub const OBSTACLE_SPAWN_OFFSET: f32 = 10.0;

    /// Chance (out of 10) of avoiding the previous spawn lane
    pub const LANE_REPEAT_AVOID_CHANCE: i32 = 6;
    /// Resample budget when avoiding the previous lane
    pub const LANE_RESAMPLE_TRIES: u32 = 6;
}

/// Render target size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True once the platform reports a usable size
    #[inline]
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// This viewport, or the fallback size if it is not known yet
    pub fn or_fallback(self) -> Self {
        if self.is_known() {
            self
        } else {
            let (w, h) = consts::FALLBACK_VIEWPORT;
            Self::new(w, h)
        }
    }
}
