use super::Segment;
use crate::geom::{Rect, Vec2};

/// What happens to the time a segment ran past its end when the sequence
/// moves on to the next phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overshoot {
    /// The next segment starts with exactly the frame's dt. The phase
    /// boundary costs one frame of the previous segment's end pose.
    #[default]
    Drop,
    /// The next segment also receives the time the previous one overshot by.
    Carry,
}

/// Ordered phases of squash-and-stretch played back to back.
///
/// `current == N` means every phase has played; the pose then stays frozen
/// on the last segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequence<const N: usize> {
    segments: [Segment; N],
    current: usize,
    overshoot: Overshoot,
}

impl<const N: usize> Sequence<N> {
    const NON_EMPTY: () = assert!(N > 0, "a sequence needs at least one segment");

    pub fn new(segments: [Segment; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            segments,
            current: 0,
            overshoot: Overshoot::Drop,
        }
    }

    pub fn with_overshoot(mut self, overshoot: Overshoot) -> Self {
        self.overshoot = overshoot;
        self
    }

    /// Pose of the active phase, or the last phase once finished.
    pub fn transform_rect(&self, texbox: Rect, anchor: Vec2) -> Rect {
        self.segments[self.current.min(N - 1)].transform_rect(texbox, anchor)
    }

    /// Advance the active phase by `dt`, moving to the next phase first if
    /// the active one already finished.
    ///
    /// Stepping past the last phase is terminal for that frame: no segment
    /// is updated.
    pub fn update(&mut self, dt: f32) {
        if self.finished() {
            return;
        }

        let mut dt = dt;
        if self.segments[self.current].finished() {
            if self.overshoot == Overshoot::Carry {
                dt += self.segments[self.current].overshoot();
            }
            self.current += 1;
        }

        if let Some(segment) = self.segments.get_mut(self.current) {
            segment.update(dt);
        }
    }

    pub fn finished(&self) -> bool {
        self.current >= N
    }

    pub fn reset(&mut self) {
        self.current = 0;
        for segment in &mut self.segments {
            segment.reset();
        }
    }

    /// Jump to the resting pose at the end of the last phase.
    pub fn finish(&mut self) {
        for segment in &mut self.segments {
            segment.finish();
        }
        self.current = N;
    }

    /// Index of the active phase (`N` once finished).
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn segments(&self) -> &[Segment; N] {
        &self.segments
    }
}
