//! Platform abstraction layer
//!
//! Everything the game needs from the outside world goes through `Platform`:
//! - Monotonic time and a free-running tick counter
//! - Discrete input events and a held-key snapshot
//! - Viewport size, queried fresh every frame
//! - Display mode changes (render context rebuilds)
//! - Presenting a finished frame

pub mod headless;

pub use headless::HeadlessPlatform;

use thiserror::Error;

use crate::Viewport;
use crate::input::{HeldKeys, InputEvent};
use crate::renderer::DrawList;

/// Requested window presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// Desktop fullscreen
    pub fullscreen: bool,
    /// Window size used while not fullscreen
    pub windowed_size: (u32, u32),
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            fullscreen: false,
            windowed_size: (960, 540),
        }
    }
}

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to rebuild render context: {0}")]
    ContextRebuild(String),
    #[error("display mode {width}x{height} is not supported")]
    UnsupportedMode { width: u32, height: u32 },
}

/// Services the orchestrator consumes from the host
pub trait Platform {
    /// Monotonic clock in seconds
    fn now_seconds(&self) -> f64;

    /// Milliseconds since startup, for cosmetic animation
    fn ticks_ms(&self) -> u64;

    /// Next queued event, if any
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Driving keys currently held
    fn held_keys(&self) -> HeldKeys;

    /// Current render target size; may be zero while the window is not ready
    fn viewport_size(&self) -> Viewport;

    /// Switch display mode and rebuild the render context
    fn apply_display(&mut self, mode: DisplayMode) -> Result<(), PlatformError>;

    /// Show the finished frame
    fn present(&mut self, frame: &DrawList);
}
