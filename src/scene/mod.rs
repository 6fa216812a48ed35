//! Scenes and the context they run in
//!
//! The set of scenes is closed, so dispatch is a plain enum match. Scenes
//! never touch the orchestrator directly: they get a `SceneCtx` for the
//! current call and ask it for transitions, quits and display changes. All
//! of those are deferred and applied by the orchestrator at a safe point.

pub mod menu;
pub mod options;
pub mod race;

pub use menu::MenuScene;
pub use options::OptionsScene;
pub use race::RaceScene;

use crate::Viewport;
use crate::game::Shell;
use crate::input::{HeldKeys, InputEvent};
use crate::platform::DisplayMode;
use crate::renderer::DrawList;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Menu,
    Race,
    Options,
}

/// What a scene needs at construction
#[derive(Debug, Clone, Copy)]
pub struct SceneSetup {
    pub viewport: Viewport,
    /// Seed for any scene-owned randomness
    pub seed: u64,
}

/// Per-call view of the orchestrator handed to scenes
pub struct SceneCtx<'a> {
    shell: &'a mut Shell,
    settings: &'a Settings,
    viewport: Viewport,
    held: HeldKeys,
    ticks_ms: u64,
}

impl<'a> SceneCtx<'a> {
    pub(crate) fn new(
        shell: &'a mut Shell,
        settings: &'a Settings,
        viewport: Viewport,
        held: HeldKeys,
        ticks_ms: u64,
    ) -> Self {
        Self {
            shell,
            settings,
            viewport,
            held,
            ticks_ms,
        }
    }

    /// Switch to `id` after this frame's update
    pub fn request_scene(&mut self, id: SceneId) {
        self.shell.request_scene(id);
    }

    pub fn request_quit(&mut self) {
        self.shell.request_quit();
    }

    /// Render target size for this frame; may be zero
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn ticks_ms(&self) -> u64 {
        self.ticks_ms
    }

    pub fn settings(&self) -> &Settings {
        self.settings
    }

    /// Display mode as it will be after pending changes apply
    pub fn display(&self) -> DisplayMode {
        self.shell.target_display()
    }

    pub fn toggle_fullscreen(&mut self) {
        self.shell.toggle_fullscreen();
    }

    /// Returns false if ignored (fullscreen)
    pub fn set_windowed_resolution(&mut self, width: u32, height: u32) -> bool {
        self.shell.set_windowed_resolution(width, height)
    }
}

/// The active scene
#[derive(Debug)]
pub enum Scene {
    Menu(MenuScene),
    Race(RaceScene),
    Options(OptionsScene),
}

impl Scene {
    /// Build a fresh scene; nothing carries over from a previous instance
    pub fn new(id: SceneId, setup: SceneSetup) -> Self {
        match id {
            SceneId::Menu => Scene::Menu(MenuScene::new()),
            SceneId::Race => Scene::Race(RaceScene::new(setup)),
            SceneId::Options => Scene::Options(OptionsScene::new()),
        }
    }

    pub fn id(&self) -> SceneId {
        match self {
            Scene::Menu(_) => SceneId::Menu,
            Scene::Race(_) => SceneId::Race,
            Scene::Options(_) => SceneId::Options,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneCtx) {
        match self {
            Scene::Menu(scene) => scene.handle_event(event, ctx),
            Scene::Race(scene) => scene.handle_event(event, ctx),
            Scene::Options(scene) => scene.handle_event(event, ctx),
        }
    }

    pub fn update(&mut self, dt: f32, ctx: &mut SceneCtx) {
        match self {
            Scene::Race(scene) => scene.update(dt, ctx),
            // Static screens
            Scene::Menu(_) | Scene::Options(_) => {}
        }
    }

    pub fn render(&self, draw: &mut DrawList, ctx: &SceneCtx) {
        match self {
            Scene::Menu(scene) => scene.render(draw, ctx),
            Scene::Race(scene) => scene.render(draw, ctx),
            Scene::Options(scene) => scene.render(draw, ctx),
        }
    }
}
