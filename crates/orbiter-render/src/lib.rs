//! Presentation-adapter surface for the orbiter simulation.
//!
//! The core never touches pixels, fonts, sound buffers, or the window: it
//! drives a [`Presenter`]. Draw this sprite at this position and rotation,
//! persist this trail segment, render these labels, play this sound. A real
//! frontend implements the trait against its graphics/audio stack;
//! [`RecordingPresenter`] is the headless implementation used by tests and
//! the headless binary.

mod presenter;
mod recording;

pub use presenter::{
    BoxedLabelCmd, Color, LabelCmd, OverlayKind, Presenter, Rect, SoundId, SpriteVariant,
};
pub use recording::{FrameCommand, RecordingPresenter};
