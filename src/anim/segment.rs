use super::AnimError;
use crate::geom::{Rect, Vec2};

/*
Squash-and-Stretch Segment
==========================

A segment is one timed ramp of a single number, the "offset", which is then
used to deform a sprite's box. Chaining a few of these gives a character the
rubbery anticipation/landing feel of classic cartoon animation.

Vocabulary
----------

  offset      How much height is traded for width. 0.0 leaves the box
              alone, positive values squash (shorter, wider), negative
              values stretch (taller, thinner). Expressed as a fraction of
              the box height.

  begin/end   Offset at t = 0 and at t = duration.

  anchor      The point the sprite is attached to (the character position).
              The deformed box is centered on anchor.x and keeps its bottom
              edge where the undeformed box had it, so the sprite squashes
              into the floor instead of floating.


The Math
--------

    factor  = t / duration
    offset  = begin + (end - begin) * factor

    w = box.w + offset * box.h
    h = box.h - offset * box.h

    x = anchor.x - w / 2
    y = anchor.y + box.h / 2 - h      (bottom edge pinned)

    offset = 0.2 on a 256 px box:

      ┌────────┐                ┌──────────────┐
      │        │       →        │              │  w = 307.2
      │        │                │              │  h = 204.8
      └────────┘                └──────────────┘
     ─────────── floor ──────────────────────────

`factor` is not clamped. The frame that pushes t past duration renders a
pose slightly beyond `end`; callers that care freeze on `finished()`.
*/

/// One time-bounded linear squash-and-stretch interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    begin: f32,
    end: f32,
    duration: f32,
    t: f32,
}

impl Segment {
    /// Build a segment ramping the offset from `begin` to `end` over
    /// `duration` seconds. The duration must be positive and finite.
    pub fn new(begin: f32, end: f32, duration: f32) -> Result<Self, AnimError> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(AnimError::InvalidDuration(duration));
        }

        Ok(Self {
            begin,
            end,
            duration,
            t: 0.0,
        })
    }

    /// Deform `texbox` (given in local space around the origin) and place
    /// it at `anchor`.
    pub fn transform_rect(&self, texbox: Rect, anchor: Vec2) -> Rect {
        let offset = self.offset();
        let w = texbox.w + offset * texbox.h;
        let h = texbox.h - offset * texbox.h;

        Rect {
            x: anchor.x - w * 0.5,
            y: anchor.y + texbox.h * 0.5 - h,
            w,
            h,
        }
    }

    /// Advance by `dt` seconds. Does nothing once finished.
    pub fn update(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative time step: {dt}");

        if !self.finished() {
            self.t += dt;
        }
    }

    pub fn finished(&self) -> bool {
        self.t >= self.duration
    }

    pub fn reset(&mut self) {
        self.t = 0.0;
    }

    /// Jump straight to the end pose.
    pub fn finish(&mut self) {
        self.t = self.duration;
    }

    /// Current interpolated offset.
    pub fn offset(&self) -> f32 {
        self.begin + (self.end - self.begin) * (self.t / self.duration)
    }

    /// Time spent past `duration` (zero while still running).
    pub fn overshoot(&self) -> f32 {
        (self.t - self.duration).max(0.0)
    }

    pub fn elapsed(&self) -> f32 {
        self.t
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}
