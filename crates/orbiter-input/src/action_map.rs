//! Action mapping: semantic game actions bound to physical keys.
//!
//! [`InputMap`] holds the bindings and resolves per-tick thrust with the
//! fixed precedence right → left → up → down: at most one thruster fires per
//! tick no matter how many directions are held.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::keyboard::KeyState;

/// Serde helper module for [`KeyCode`], which doesn't implement serde natively.
mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    /// Serialize a [`KeyCode`] as its debug string (e.g., `"ArrowLeft"`).
    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        format!("{code:?}").serialize(s)
    }

    /// Deserialize a [`KeyCode`] from its debug string.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        string_to_keycode(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }

    pub(super) fn string_to_keycode(s: &str) -> Option<KeyCode> {
        // Match the Debug output of KeyCode variants.
        Some(match s {
            "KeyA" => KeyCode::KeyA,
            "KeyB" => KeyCode::KeyB,
            "KeyC" => KeyCode::KeyC,
            "KeyD" => KeyCode::KeyD,
            "KeyE" => KeyCode::KeyE,
            "KeyF" => KeyCode::KeyF,
            "KeyG" => KeyCode::KeyG,
            "KeyH" => KeyCode::KeyH,
            "KeyI" => KeyCode::KeyI,
            "KeyJ" => KeyCode::KeyJ,
            "KeyK" => KeyCode::KeyK,
            "KeyL" => KeyCode::KeyL,
            "KeyM" => KeyCode::KeyM,
            "KeyN" => KeyCode::KeyN,
            "KeyO" => KeyCode::KeyO,
            "KeyP" => KeyCode::KeyP,
            "KeyQ" => KeyCode::KeyQ,
            "KeyR" => KeyCode::KeyR,
            "KeyS" => KeyCode::KeyS,
            "KeyT" => KeyCode::KeyT,
            "KeyU" => KeyCode::KeyU,
            "KeyV" => KeyCode::KeyV,
            "KeyW" => KeyCode::KeyW,
            "KeyX" => KeyCode::KeyX,
            "KeyY" => KeyCode::KeyY,
            "KeyZ" => KeyCode::KeyZ,
            "Space" => KeyCode::Space,
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Escape,
            "Tab" => KeyCode::Tab,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            _ => return None,
        })
    }
}

/// Semantic game actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Increase tangential velocity (+x).
    ThrustRight,
    /// Decrease tangential velocity (−x).
    ThrustLeft,
    /// Thrust away from the planet (−y on a y-down screen).
    ThrustUp,
    /// Thrust toward the planet (+y).
    ThrustDown,
    /// Hold to show the moisture map (only while the orbit qualifies).
    MapMoisture,
    /// Clear the painted orbital trail.
    ClearTrail,
    /// Toggle fullscreen.
    ToggleFullscreen,
}

/// One of the four discrete thruster directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrustDirection {
    Right,
    Left,
    Up,
    Down,
}

impl ThrustDirection {
    /// Resolution order when several thrust keys are held at once.
    pub const PRIORITY: [ThrustDirection; 4] = [
        ThrustDirection::Right,
        ThrustDirection::Left,
        ThrustDirection::Up,
        ThrustDirection::Down,
    ];

    /// The action bound to this direction.
    pub fn action(self) -> Action {
        match self {
            ThrustDirection::Right => Action::ThrustRight,
            ThrustDirection::Left => Action::ThrustLeft,
            ThrustDirection::Up => Action::ThrustUp,
            ThrustDirection::Down => Action::ThrustDown,
        }
    }
}

/// A key bound to an action, serializable by key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding(#[serde(with = "keycode_serde")] pub KeyCode);

/// Errors from loading a bindings file.
#[derive(Debug, thiserror::Error)]
pub enum BindingsError {
    /// Failed to read the bindings file from disk.
    #[error("failed to read bindings: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse bindings: {0}")]
    ParseError(#[source] ron::error::SpannedError),
}

/// Bindings from semantic actions to physical keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMap {
    bindings: HashMap<Action, KeyBinding>,
}

impl Default for InputMap {
    /// Arrow-key thrusters, `M` for mapping, space to clear the trail,
    /// escape for fullscreen.
    fn default() -> Self {
        let bindings = HashMap::from([
            (Action::ThrustRight, KeyBinding(KeyCode::ArrowRight)),
            (Action::ThrustLeft, KeyBinding(KeyCode::ArrowLeft)),
            (Action::ThrustUp, KeyBinding(KeyCode::ArrowUp)),
            (Action::ThrustDown, KeyBinding(KeyCode::ArrowDown)),
            (Action::MapMoisture, KeyBinding(KeyCode::KeyM)),
            (Action::ClearTrail, KeyBinding(KeyCode::Space)),
            (Action::ToggleFullscreen, KeyBinding(KeyCode::Escape)),
        ]);
        Self { bindings }
    }
}

impl InputMap {
    /// Load bindings from a RON file, or fall back to the defaults when the
    /// file doesn't exist. Parse failures are reported, not defaulted over.
    pub fn load_or_default(path: &Path) -> Result<Self, BindingsError> {
        if !path.exists() {
            tracing::debug!("no bindings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(BindingsError::ReadError)?;
        let map = ron::from_str(&contents).map_err(BindingsError::ParseError)?;
        tracing::info!("loaded key bindings from {}", path.display());
        Ok(map)
    }

    /// The key bound to an action, if any.
    pub fn key_for(&self, action: Action) -> Option<KeyCode> {
        self.bindings.get(&action).map(|binding| binding.0)
    }

    /// The action a key is bound to, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binding)| binding.0 == key)
            .map(|(action, _)| *action)
    }

    /// Resolve the thruster to fire this tick from the held keys.
    ///
    /// At most one direction fires per tick; ties between held keys break by
    /// [`ThrustDirection::PRIORITY`].
    pub fn resolve_thrust(&self, keys: &KeyState) -> Option<ThrustDirection> {
        ThrustDirection::PRIORITY.into_iter().find(|direction| {
            self.key_for(direction.action())
                .is_some_and(|key| keys.is_held(key))
        })
    }

    /// Whether the edge-triggered action's key went down this tick.
    pub fn just_activated(&self, keys: &KeyState, action: Action) -> bool {
        self.key_for(action).is_some_and(|key| keys.just_pressed(key))
    }
}
