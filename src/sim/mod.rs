//! Racing simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and
//! platform concerns:
//! - Inputs arrive as a `DriveInput` snapshot plus an explicit viewport
//! - Randomness only through the `LaneRng` capability
//! - Level tuning is a pure function of the level index

pub mod car;
pub mod level;
pub mod obstacle;
pub mod rect;
pub mod rng;
pub mod road;
pub mod state;
pub mod tick;

pub use car::{Car, DriveInput};
pub use level::{LevelConfig, level_config};
pub use obstacle::{Obstacle, Spawner};
pub use rect::Rect;
pub use rng::{LaneRng, SequenceRng, seeded};
pub use road::Road;
pub use state::{RaceSim, RaceState};
pub use tick::{TickEvent, tick};
