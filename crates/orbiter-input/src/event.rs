//! Platform-independent input events.

use winit::keyboard::KeyCode;

/// One input event polled from the presentation adapter.
///
/// Physical key codes are used so that the thruster layout works identically
/// regardless of the user's keyboard layout. Adapters are expected to
/// collapse OS key-repeat into a single `KeyDown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window / end the run.
    Quit,
    /// A key transitioned to pressed.
    KeyDown(KeyCode),
    /// A key transitioned to released.
    KeyUp(KeyCode),
}

impl InputEvent {
    /// The key involved, if any.
    pub fn key(&self) -> Option<KeyCode> {
        match self {
            InputEvent::Quit => None,
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => Some(*key),
        }
    }
}
