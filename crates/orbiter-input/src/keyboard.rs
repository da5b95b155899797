//! Frame-coherent key state tracker.
//!
//! [`KeyState`] accumulates [`InputEvent`]s during a tick and answers three
//! questions for any key: is it held, did it go down this tick, did it come
//! up this tick. Thrust polling reads the held set every tick; edge-triggered
//! actions read the transient sets, which are cleared at end of tick.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use crate::event::InputEvent;

/// Tracks per-tick keyboard state.
///
/// # Usage
///
/// 1. Feed every polled event to [`apply`](Self::apply).
/// 2. Query with [`is_held`](Self::is_held), [`just_pressed`](Self::just_pressed),
///    [`just_released`](Self::just_released).
/// 3. Call [`clear_transients`](Self::clear_transients) at the end of the tick.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<KeyCode>,
    just_pressed: HashSet<KeyCode>,
    just_released: HashSet<KeyCode>,
}

impl KeyState {
    /// Creates a new `KeyState` with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates state from one polled event.
    ///
    /// A `KeyDown` for a key that is already held (platform repeat that the
    /// adapter didn't collapse) does not re-flag `just_pressed`.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Quit => {}
            InputEvent::KeyDown(key) => {
                if self.held.insert(*key) {
                    self.just_pressed.insert(*key);
                }
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(key);
                self.just_released.insert(*key);
            }
        }
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` only during the tick the key went down.
    #[must_use]
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Returns `true` only during the tick the key came up.
    #[must_use]
    pub fn just_released(&self, key: KeyCode) -> bool {
        self.just_released.contains(&key)
    }

    /// Returns `true` if any key at all came up this tick.
    #[must_use]
    pub fn any_just_released(&self) -> bool {
        !self.just_released.is_empty()
    }

    /// Clears the transient sets. Call at end of tick.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_cycle() {
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown(KeyCode::ArrowRight));
        assert!(keys.is_held(KeyCode::ArrowRight));
        assert!(keys.just_pressed(KeyCode::ArrowRight));
        assert!(!keys.just_released(KeyCode::ArrowRight));

        keys.clear_transients();
        assert!(keys.is_held(KeyCode::ArrowRight));
        assert!(!keys.just_pressed(KeyCode::ArrowRight));

        keys.apply(&InputEvent::KeyUp(KeyCode::ArrowRight));
        assert!(!keys.is_held(KeyCode::ArrowRight));
        assert!(keys.just_released(KeyCode::ArrowRight));
        assert!(keys.any_just_released());

        keys.clear_transients();
        assert!(!keys.any_just_released());
    }

    #[test]
    fn test_repeat_keydown_does_not_refire_edge() {
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown(KeyCode::KeyM));
        keys.clear_transients();
        keys.apply(&InputEvent::KeyDown(KeyCode::KeyM));
        assert!(keys.is_held(KeyCode::KeyM));
        assert!(!keys.just_pressed(KeyCode::KeyM));
    }

    #[test]
    fn test_quit_leaves_keys_untouched() {
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown(KeyCode::Space));
        keys.apply(&InputEvent::Quit);
        assert!(keys.is_held(KeyCode::Space));
    }

    #[test]
    fn test_held_persists_across_ticks() {
        let mut keys = KeyState::new();
        keys.apply(&InputEvent::KeyDown(KeyCode::ArrowUp));
        for _ in 0..5 {
            keys.clear_transients();
            assert!(keys.is_held(KeyCode::ArrowUp));
        }
    }
}
