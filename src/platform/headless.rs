//! Windowless platform backend
//!
//! Drives the game from a script: a fixed frame step for the clock, input
//! events scheduled by frame number, and an in-memory "display" that records
//! what was presented. Used by the demo binary and by tests.

use std::collections::{BTreeMap, VecDeque};

use super::{DisplayMode, Platform, PlatformError};
use crate::Viewport;
use crate::input::{HeldKeys, InputAction, InputEvent};
use crate::renderer::{DrawList, shapes, vertex};

/// Clock step per presented frame (60 Hz)
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Size reported while fullscreen
pub const DESKTOP_SIZE: (u32, u32) = (1920, 1080);

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    time: f64,
    display: DisplayMode,
    /// Size reported before the first display is applied, if overridden
    viewport_override: Option<Viewport>,
    held: HeldKeys,
    schedule: BTreeMap<u64, Vec<InputEvent>>,
    pending: VecDeque<InputEvent>,
    loaded_frame: Option<u64>,
    /// Inject a `Quit` once this many frames were presented
    frame_limit: Option<u64>,
    fail_display: bool,
    frames_presented: u64,
    display_rebuilds: u32,
    vertex_bytes: usize,
    last_frame: DrawList,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(DisplayMode::default())
    }
}

impl HeadlessPlatform {
    pub fn new(display: DisplayMode) -> Self {
        Self {
            time: 0.0,
            display,
            viewport_override: None,
            held: HeldKeys::default(),
            schedule: BTreeMap::new(),
            pending: VecDeque::new(),
            loaded_frame: None,
            frame_limit: None,
            fail_display: false,
            frames_presented: 0,
            display_rebuilds: 0,
            vertex_bytes: 0,
            last_frame: DrawList::new(),
        }
    }

    /// Stop the run after `frames` presented frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Report a fixed viewport instead of the display mode's size
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport_override = Some(viewport);
    }

    /// Queue `event` for delivery during frame `frame` (0-based)
    pub fn schedule(&mut self, frame: u64, event: InputEvent) {
        self.schedule.entry(frame).or_default().push(event);
    }

    /// Queue `event` for the next frame that polls
    pub fn push_event(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn set_held(&mut self, action: InputAction, is_down: bool) {
        self.held.set(action, is_down);
    }

    /// Make every display rebuild fail
    pub fn fail_display_rebuilds(&mut self, fail: bool) {
        self.fail_display = fail;
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn display_rebuilds(&self) -> u32 {
        self.display_rebuilds
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    /// Total vertex bytes generated across all presented frames
    pub fn vertex_bytes(&self) -> usize {
        self.vertex_bytes
    }

    /// The most recently presented frame
    pub fn last_frame(&self) -> &DrawList {
        &self.last_frame
    }

    fn load_scheduled(&mut self) {
        let frame = self.frames_presented;
        if self.loaded_frame == Some(frame) {
            return;
        }
        self.loaded_frame = Some(frame);

        if self.frame_limit.is_some_and(|limit| frame >= limit) {
            self.pending.push_back(InputEvent::Quit);
        }
        if let Some(events) = self.schedule.remove(&frame) {
            self.pending.extend(events);
        }
    }
}

impl Platform for HeadlessPlatform {
    fn now_seconds(&self) -> f64 {
        self.time
    }

    fn ticks_ms(&self) -> u64 {
        (self.time * 1000.0) as u64
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.load_scheduled();
        let event = self.pending.pop_front()?;
        self.held.apply_event(&event);
        Some(event)
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }

    fn viewport_size(&self) -> Viewport {
        if let Some(viewport) = self.viewport_override {
            return viewport;
        }
        let (w, h) = if self.display.fullscreen {
            DESKTOP_SIZE
        } else {
            self.display.windowed_size
        };
        Viewport::new(w as i32, h as i32)
    }

    fn apply_display(&mut self, mode: DisplayMode) -> Result<(), PlatformError> {
        if self.fail_display {
            return Err(PlatformError::ContextRebuild(
                "headless display rebuild disabled".to_string(),
            ));
        }
        let (width, height) = mode.windowed_size;
        if !mode.fullscreen && (width == 0 || height == 0) {
            return Err(PlatformError::UnsupportedMode { width, height });
        }
        self.display = mode;
        self.viewport_override = None;
        self.display_rebuilds += 1;
        Ok(())
    }

    fn present(&mut self, frame: &DrawList) {
        let vertices = shapes::tessellate(frame, self.viewport_size());
        self.vertex_bytes += vertex::as_bytes(&vertices).len();
        self.last_frame.clone_from(frame);
        self.frames_presented += 1;
        self.time += FRAME_DT;
    }
}
