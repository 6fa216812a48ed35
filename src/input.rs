//! Input vocabulary shared by the platform, the orchestrator and scenes
//!
//! Two kinds of input exist: discrete key events (edge-triggered, drained
//! once per frame) and a held-key snapshot sampled when a scene updates.

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    F,
    R,
    Enter,
    KeypadEnter,
    Escape,
    Other,
}

impl Key {
    /// Confirm/advance keys
    #[inline]
    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::KeypadEnter)
    }

    /// The global "back" key
    #[inline]
    pub fn is_back(self) -> bool {
        self == Key::Escape
    }
}

/// A discrete event delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / OS quit
    Quit,
    /// Key pressed; `repeat` is set for auto-repeat presses
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
}

impl InputEvent {
    pub const fn press(key: Key) -> Self {
        Self::KeyDown { key, repeat: false }
    }

    /// The key of a fresh (non-repeated) press, if this is one
    pub fn fresh_press(&self) -> Option<Key> {
        match *self {
            InputEvent::KeyDown { key, repeat: false } => Some(key),
            _ => None,
        }
    }
}

/// Driving actions polled from the held-key snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    SteerLeft,
    SteerRight,
    Accelerate,
    Brake,
}

const ACTION_COUNT: usize = 4;

impl InputAction {
    pub const ALL: [InputAction; ACTION_COUNT] = [
        InputAction::SteerLeft,
        InputAction::SteerRight,
        InputAction::Accelerate,
        InputAction::Brake,
    ];

    const fn index(self) -> usize {
        match self {
            InputAction::SteerLeft => 0,
            InputAction::SteerRight => 1,
            InputAction::Accelerate => 2,
            InputAction::Brake => 3,
        }
    }

    /// Default key binding (arrows or WASD)
    pub fn bound_to(self, key: Key) -> bool {
        match self {
            InputAction::SteerLeft => matches!(key, Key::A | Key::Left),
            InputAction::SteerRight => matches!(key, Key::D | Key::Right),
            InputAction::Accelerate => matches!(key, Key::W | Key::Up),
            InputAction::Brake => matches!(key, Key::S | Key::Down),
        }
    }
}

/// Point-in-time snapshot of which driving actions are held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    down: [bool; ACTION_COUNT],
}

impl HeldKeys {
    pub fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }

    pub fn with(mut self, action: InputAction, is_down: bool) -> Self {
        self.set(action, is_down);
        self
    }

    /// Track a key event against the default bindings
    pub fn apply_event(&mut self, event: &InputEvent) {
        let (key, is_down) = match *event {
            InputEvent::KeyDown { key, .. } => (key, true),
            InputEvent::KeyUp { key } => (key, false),
            InputEvent::Quit => return,
        };
        for action in InputAction::ALL {
            if action.bound_to(key) {
                self.set(action, is_down);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_press_ignores_repeat() {
        assert_eq!(InputEvent::press(Key::Enter).fresh_press(), Some(Key::Enter));
        let repeated = InputEvent::KeyDown {
            key: Key::Enter,
            repeat: true,
        };
        assert_eq!(repeated.fresh_press(), None);
        assert_eq!(InputEvent::KeyUp { key: Key::Enter }.fresh_press(), None);
    }

    #[test]
    fn test_held_keys_follow_bindings() {
        let mut held = HeldKeys::default();
        held.apply_event(&InputEvent::press(Key::Left));
        held.apply_event(&InputEvent::press(Key::W));
        assert!(held.is_down(InputAction::SteerLeft));
        assert!(held.is_down(InputAction::Accelerate));
        assert!(!held.is_down(InputAction::Brake));

        held.apply_event(&InputEvent::KeyUp { key: Key::Left });
        assert!(!held.is_down(InputAction::SteerLeft));
    }
}
