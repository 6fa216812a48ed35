//! Lane Rush demo runner
//!
//! Plays a scripted session on the headless platform: start a race from the
//! menu, hold the throttle, weave between lanes, confirm through overlays,
//! then back out to the menu and quit.

use lane_rush::input::{InputEvent, Key};
use lane_rush::platform::HeadlessPlatform;
use lane_rush::{Game, Settings};

/// Frames between steering changes
const WEAVE_PERIOD: u64 = 45;
/// Frames between confirm presses (retry / next level)
const CONFIRM_PERIOD: u64 = 120;

fn main() {
    env_logger::init();
    log::info!("Lane Rush (headless) starting...");

    let settings = Settings::load();
    let frames = settings.demo_frames.max(4);

    let mut platform = HeadlessPlatform::new(settings.display_mode()).with_frame_limit(frames + 1);
    script_demo(&mut platform, frames);

    let mut game = Game::new(settings, &platform);
    let rendered = game.run(&mut platform);

    log::info!(
        "Demo finished: {} frames, {} vertex bytes",
        rendered,
        platform.vertex_bytes()
    );
}

fn script_demo(platform: &mut HeadlessPlatform, frames: u64) {
    let last = frames - 1;

    // Menu -> race, then floor it
    platform.schedule(0, InputEvent::press(Key::Enter));
    platform.schedule(1, InputEvent::press(Key::Up));

    let mut steer = Key::Left;
    for frame in (WEAVE_PERIOD..last - 1).step_by(WEAVE_PERIOD as usize) {
        let other = if steer == Key::Left { Key::Right } else { Key::Left };
        platform.schedule(frame, InputEvent::KeyUp { key: other });
        platform.schedule(frame, InputEvent::press(steer));
        steer = other;
    }

    for frame in (CONFIRM_PERIOD..last - 1).step_by(CONFIRM_PERIOD as usize) {
        platform.schedule(frame, InputEvent::press(Key::Enter));
    }

    // Race -> menu -> quit
    platform.schedule(last - 1, InputEvent::press(Key::Escape));
    platform.schedule(last, InputEvent::press(Key::Escape));
}
