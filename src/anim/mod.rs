//! Time-driven squash-and-stretch deformation.
//!
//! A [`Segment`] ramps one deformation offset over a fixed duration; a
//! [`Sequence`] plays a fixed number of segments back to back. Both answer the
//! same four questions (pose, advance, done, rewind), and [`Animation`] lets
//! the main loop hold either one behind a single type.
//!
//! Animation state lives on the main loop only; nothing here is shared with
//! the audio thread.

pub mod segment;
pub mod sequence;

pub use segment::Segment;
pub use sequence::{Overshoot, Sequence};

use crate::geom::{Rect, Vec2};

/// Errors raised while building animations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum AnimError {
    #[error("segment duration must be positive and finite, got {0}")]
    InvalidDuration(f32),
}

/// Either a single segment or a sequence of `N` segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation<const N: usize> {
    Segment(Segment),
    Sequence(Sequence<N>),
}

impl<const N: usize> Animation<N> {
    pub fn transform_rect(&self, texbox: Rect, anchor: Vec2) -> Rect {
        match self {
            Animation::Segment(segment) => segment.transform_rect(texbox, anchor),
            Animation::Sequence(sequence) => sequence.transform_rect(texbox, anchor),
        }
    }

    pub fn update(&mut self, dt: f32) {
        match self {
            Animation::Segment(segment) => segment.update(dt),
            Animation::Sequence(sequence) => sequence.update(dt),
        }
    }

    pub fn finished(&self) -> bool {
        match self {
            Animation::Segment(segment) => segment.finished(),
            Animation::Sequence(sequence) => sequence.finished(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Animation::Segment(segment) => segment.reset(),
            Animation::Sequence(sequence) => sequence.reset(),
        }
    }

    /// Jump to the resting pose at the end.
    pub fn finish(&mut self) {
        match self {
            Animation::Segment(segment) => segment.finish(),
            Animation::Sequence(sequence) => sequence.finish(),
        }
    }
}

impl<const N: usize> From<Segment> for Animation<N> {
    fn from(segment: Segment) -> Self {
        Animation::Segment(segment)
    }
}

impl<const N: usize> From<Sequence<N>> for Animation<N> {
    fn from(sequence: Sequence<N>) -> Self {
        Animation::Sequence(sequence)
    }
}
