//! Frame loop and scene lifecycle
//!
//! One iteration: measure dt, drain input, apply any pending display change,
//! update the active scene, apply any pending scene swap, render, present.
//! Quit is checked after the drain and after the display change, so a quit
//! request never produces another update.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::InputEvent;
use crate::platform::{DisplayMode, Platform};
use crate::renderer::DrawList;
use crate::scene::{Scene, SceneCtx, SceneId, SceneSetup};
use crate::settings::Settings;

/// Orchestrator state that scenes may change through `SceneCtx`
#[derive(Debug, Clone)]
pub struct Shell {
    pub running: bool,
    pub pending_scene: Option<SceneId>,
    /// Mode the platform is currently showing
    pub display: DisplayMode,
    pub pending_display: Option<DisplayMode>,
}

impl Shell {
    pub fn new(display: DisplayMode) -> Self {
        Self {
            running: true,
            pending_scene: None,
            display,
            pending_display: None,
        }
    }

    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Last request in a frame wins
    pub fn request_scene(&mut self, id: SceneId) {
        self.pending_scene = Some(id);
    }

    /// Current mode with pending changes applied
    pub fn target_display(&self) -> DisplayMode {
        self.pending_display.unwrap_or(self.display)
    }

    pub fn toggle_fullscreen(&mut self) {
        let mut mode = self.target_display();
        mode.fullscreen = !mode.fullscreen;
        self.pending_display = Some(mode);
    }

    /// Returns false (and changes nothing) while fullscreen
    pub fn set_windowed_resolution(&mut self, width: u32, height: u32) -> bool {
        let mut mode = self.target_display();
        if mode.fullscreen {
            log::debug!("Ignoring {width}x{height} resolution request while fullscreen");
            return false;
        }
        mode.windowed_size = (width, height);
        self.pending_display = Some(mode);
        true
    }
}

/// Main game instance
pub struct Game {
    shell: Shell,
    settings: Settings,
    scene: Scene,
    /// Reused every frame
    draw: DrawList,
    last_time: Option<f64>,
    frames: u64,
}

impl Game {
    /// Start on the menu. The platform must already show `settings.display_mode()`.
    pub fn new(settings: Settings, platform: &impl Platform) -> Self {
        let shell = Shell::new(settings.display_mode());
        let setup = SceneSetup {
            viewport: platform.viewport_size(),
            seed: scene_seed(&settings),
        };
        Self {
            shell,
            settings,
            scene: Scene::new(SceneId::Menu, setup),
            draw: DrawList::new(),
            last_time: None,
            frames: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.shell.running
    }

    pub fn request_quit(&mut self) {
        self.shell.request_quit();
    }

    pub fn request_scene(&mut self, id: SceneId) {
        self.shell.request_scene(id);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Run until quit. Returns the number of frames rendered.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> u64 {
        log::info!("Entering main loop on {:?}", self.scene.id());
        while self.shell.running {
            let now = platform.now_seconds();
            let dt = match self.last_time {
                Some(last) => (now - last).max(0.0) as f32,
                None => 0.0,
            };
            self.last_time = Some(now);
            self.step(platform, dt);
        }
        log::info!("Main loop finished after {} frames", self.frames);
        self.frames
    }

    /// One loop iteration with an explicit `dt`.
    /// Returns false if the game stopped before rendering.
    pub fn step<P: Platform>(&mut self, platform: &mut P, dt: f32) -> bool {
        if !self.shell.running {
            return false;
        }

        while let Some(event) = platform.poll_event() {
            self.dispatch(&event, platform);
            if !self.shell.running {
                break;
            }
        }
        if !self.shell.running {
            return false;
        }

        self.apply_display(platform);
        if !self.shell.running {
            return false;
        }

        let viewport = platform.viewport_size();
        let held = platform.held_keys();
        let ticks = platform.ticks_ms();
        {
            let mut ctx = SceneCtx::new(&mut self.shell, &self.settings, viewport, held, ticks);
            self.scene.update(dt, &mut ctx);
        }

        if let Some(id) = self.shell.pending_scene.take() {
            self.switch_scene(id, platform);
        }

        self.draw.reset();
        {
            let ctx = SceneCtx::new(&mut self.shell, &self.settings, viewport, held, ticks);
            self.scene.render(&mut self.draw, &ctx);
        }
        platform.present(&self.draw);
        self.frames += 1;
        true
    }

    fn dispatch<P: Platform>(&mut self, event: &InputEvent, platform: &P) {
        if *event == InputEvent::Quit {
            log::info!("Quit requested by platform");
            self.shell.request_quit();
            return;
        }

        // Escape is global: back to the menu, or quit from the menu
        if event.fresh_press().is_some_and(|key| key.is_back()) {
            if self.scene.id() == SceneId::Menu {
                self.shell.request_quit();
            } else {
                self.shell.request_scene(SceneId::Menu);
            }
            return;
        }

        let mut ctx = SceneCtx::new(
            &mut self.shell,
            &self.settings,
            platform.viewport_size(),
            platform.held_keys(),
            platform.ticks_ms(),
        );
        self.scene.handle_event(event, &mut ctx);
    }

    fn apply_display<P: Platform>(&mut self, platform: &mut P) {
        let Some(mode) = self.shell.pending_display.take() else {
            return;
        };
        match platform.apply_display(mode) {
            Ok(()) => {
                self.shell.display = mode;
                log::info!(
                    "Display changed: fullscreen={} windowed={}x{}",
                    mode.fullscreen,
                    mode.windowed_size.0,
                    mode.windowed_size.1
                );
            }
            Err(err) => {
                log::error!("Display change failed: {err}");
                self.shell.request_quit();
            }
        }
    }

    fn switch_scene<P: Platform>(&mut self, id: SceneId, platform: &P) {
        let setup = SceneSetup {
            viewport: platform.viewport_size(),
            seed: scene_seed(&self.settings),
        };
        log::info!("Scene {:?} -> {:?}", self.scene.id(), id);
        self.scene = Scene::new(id, setup);
    }
}

/// Configured seed, or one taken from the wall clock
fn scene_seed(settings: &Settings) -> u64 {
    settings.rng_seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default()
    })
}
