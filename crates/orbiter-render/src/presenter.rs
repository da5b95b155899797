//! The [`Presenter`] trait and the value types that cross it.

use glam::DVec2;
use orbiter_input::InputEvent;

/// An RGB color with alpha, as the HUD uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a `[r, g, b]` triple (the config's color format).
    pub const fn from_triple(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

/// A screen-space rectangle: left, top, width, height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Which sprite asset to draw for an entity.
///
/// The adapter owns the actual image data and any rotation/scaling of it; the
/// core only ever names a variant and an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    /// The satellite, dish intact.
    Satellite,
    /// The satellite burning up after atmospheric entry.
    SatelliteCrashed,
    /// The planet's normal surface texture.
    Planet,
    /// The planet's soil-moisture texture (mapping mode).
    PlanetMoisture,
}

/// Sounds the core can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// The thruster rumble, played while thrusters fire.
    Thrust,
}

/// Fixed decorative overlays drawn on top of each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// The planet's shadow / day-night terminator band.
    Terminator,
    /// The one-pixel window border.
    Border,
}

/// A multi-line text label at a screen position.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCmd {
    pub lines: Vec<String>,
    pub color: Color,
    pub position: DVec2,
}

/// A single-line label centered in a fixed box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxedLabelCmd {
    pub text: String,
    pub rect: Rect,
}

/// The collaborator surface the simulation core draws through.
///
/// One frame is: any number of draw/label/sound calls, then exactly one
/// [`present_frame`](Self::present_frame). Trail segments persist across
/// frames until [`clear_trail`](Self::clear_trail).
pub trait Presenter {
    /// Poll pending input events. Called once at the start of every tick.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Draw an entity sprite at a position with a rotation in degrees.
    fn draw_entity(&mut self, position: DVec2, rotation_deg: f64, variant: SpriteVariant);

    /// Persist one segment of the orbital trail.
    fn draw_trail_segment(&mut self, from: DVec2, to: DVec2);

    /// Erase the persisted trail.
    fn clear_trail(&mut self);

    /// Render a multi-line text label.
    fn render_label(&mut self, label: &LabelCmd);

    /// Render a single-line label centered in a fixed box.
    fn render_boxed_label(&mut self, label: &BoxedLabelCmd);

    /// Start a sound. Starting an already-playing sound is a no-op.
    fn play_sound(&mut self, sound: SoundId);

    /// Stop a sound. Stopping a stopped sound is a no-op.
    fn stop_sound(&mut self, sound: SoundId);

    /// Toggle between fullscreen and windowed mode.
    fn toggle_fullscreen(&mut self);

    /// Draw a fixed decorative overlay.
    fn draw_overlay(&mut self, overlay: OverlayKind);

    /// Present the completed frame.
    fn present_frame(&mut self);
}
