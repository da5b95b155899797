//! Headless presenter that records frame commands and replays scripted input.
//!
//! Used two ways: as the test double for the simulation loop, and as the
//! backend of the headless binary, where the recorded command counts feed
//! trace logging instead of a GPU.

use std::collections::{BTreeMap, HashSet};

use glam::DVec2;
use orbiter_input::InputEvent;

use crate::presenter::{
    BoxedLabelCmd, Color, LabelCmd, OverlayKind, Presenter, Rect, SoundId, SpriteVariant,
};

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameCommand {
    Entity {
        position: DVec2,
        rotation_deg: f64,
        variant: SpriteVariant,
    },
    TrailSegment {
        from: DVec2,
        to: DVec2,
    },
    Label {
        lines: Vec<String>,
        color: Color,
        position: DVec2,
    },
    BoxedLabel {
        text: String,
        rect: Rect,
    },
    Overlay(OverlayKind),
}

/// Recording, scriptable [`Presenter`] implementation.
///
/// Events queued with [`script`](Self::script) are keyed by poll ordinal:
/// the events scripted for ordinal `n` are returned by the `n`-th
/// (zero-based) call to `poll_events`, which corresponds to simulation tick
/// `n + 1`.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    scripted: BTreeMap<u64, Vec<InputEvent>>,
    polls: u64,
    pending: Vec<FrameCommand>,
    last_frame: Vec<FrameCommand>,
    frames_presented: u64,
    trail_clears: u32,
    fullscreen_toggles: u32,
    playing: HashSet<SoundId>,
    sound_starts: u32,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for a future poll.
    pub fn script(&mut self, poll: u64, event: InputEvent) {
        self.scripted.entry(poll).or_default().push(event);
    }

    /// Commands recorded for the most recently presented frame.
    pub fn last_frame(&self) -> &[FrameCommand] {
        &self.last_frame
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// How many times the trail was cleared.
    pub fn trail_clears(&self) -> u32 {
        self.trail_clears
    }

    /// How many times fullscreen was toggled.
    pub fn fullscreen_toggles(&self) -> u32 {
        self.fullscreen_toggles
    }

    /// Whether a sound is currently playing.
    pub fn is_playing(&self, sound: SoundId) -> bool {
        self.playing.contains(&sound)
    }

    /// How many times a sound transitioned from stopped to playing.
    pub fn sound_starts(&self) -> u32 {
        self.sound_starts
    }

    /// The entity draw commands of the last frame, in draw order.
    pub fn last_entities(&self) -> Vec<(DVec2, f64, SpriteVariant)> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                FrameCommand::Entity {
                    position,
                    rotation_deg,
                    variant,
                } => Some((*position, *rotation_deg, *variant)),
                _ => None,
            })
            .collect()
    }

    /// All label lines of the last frame, flattened.
    pub fn last_label_lines(&self) -> Vec<String> {
        self.last_frame
            .iter()
            .flat_map(|cmd| match cmd {
                FrameCommand::Label { lines, .. } => lines.clone(),
                FrameCommand::BoxedLabel { text, .. } => vec![text.clone()],
                _ => Vec::new(),
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events = self.scripted.remove(&self.polls).unwrap_or_default();
        self.polls += 1;
        events
    }

    fn draw_entity(&mut self, position: DVec2, rotation_deg: f64, variant: SpriteVariant) {
        self.pending.push(FrameCommand::Entity {
            position,
            rotation_deg,
            variant,
        });
    }

    fn draw_trail_segment(&mut self, from: DVec2, to: DVec2) {
        self.pending.push(FrameCommand::TrailSegment { from, to });
    }

    fn clear_trail(&mut self) {
        self.trail_clears += 1;
    }

    fn render_label(&mut self, label: &LabelCmd) {
        self.pending.push(FrameCommand::Label {
            lines: label.lines.clone(),
            color: label.color,
            position: label.position,
        });
    }

    fn render_boxed_label(&mut self, label: &BoxedLabelCmd) {
        self.pending.push(FrameCommand::BoxedLabel {
            text: label.text.clone(),
            rect: label.rect,
        });
    }

    fn play_sound(&mut self, sound: SoundId) {
        if self.playing.insert(sound) {
            self.sound_starts += 1;
        }
    }

    fn stop_sound(&mut self, sound: SoundId) {
        self.playing.remove(&sound);
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen_toggles += 1;
    }

    fn draw_overlay(&mut self, overlay: OverlayKind) {
        self.pending.push(FrameCommand::Overlay(overlay));
    }

    fn present_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbiter_input::KeyCode;

    #[test]
    fn test_scripted_events_arrive_at_their_poll() {
        let mut presenter = RecordingPresenter::new();
        presenter.script(1, InputEvent::KeyDown(KeyCode::ArrowLeft));

        assert!(presenter.poll_events().is_empty());
        assert_eq!(
            presenter.poll_events(),
            vec![InputEvent::KeyDown(KeyCode::ArrowLeft)]
        );
        assert!(presenter.poll_events().is_empty());
    }

    #[test]
    fn test_present_frame_snapshots_commands() {
        let mut presenter = RecordingPresenter::new();
        presenter.draw_entity(DVec2::new(400.0, 320.0), 0.0, SpriteVariant::Planet);
        assert!(presenter.last_frame().is_empty());

        presenter.present_frame();
        assert_eq!(presenter.last_frame().len(), 1);
        assert_eq!(presenter.frames_presented(), 1);

        presenter.present_frame();
        assert!(presenter.last_frame().is_empty());
    }

    #[test]
    fn test_sound_start_dedup() {
        let mut presenter = RecordingPresenter::new();
        presenter.play_sound(SoundId::Thrust);
        presenter.play_sound(SoundId::Thrust);
        assert!(presenter.is_playing(SoundId::Thrust));
        assert_eq!(presenter.sound_starts(), 1);

        presenter.stop_sound(SoundId::Thrust);
        assert!(!presenter.is_playing(SoundId::Thrust));

        presenter.play_sound(SoundId::Thrust);
        assert_eq!(presenter.sound_starts(), 2);
    }
}
