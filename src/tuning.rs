//! Feel constants for the bouncing character.
//!
//! Defaults reproduce the hand-tuned values the demo ships with. A TOML file
//! may override any subset of them:
//!
//! ```toml
//! gravity = 2500.0
//! master_volume = 0.5
//!
//! [attack]
//! begin = 0.3
//! end = -0.3
//! duration = 0.08
//! ```

#[cfg(feature = "serde")]
use std::path::Path;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use tracing::info;

use crate::anim::{AnimError, Segment, Sequence};

/// Parameters of one squash-and-stretch segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSpec {
    pub begin: f32,
    pub end: f32,
    pub duration: f32,
}

impl SegmentSpec {
    pub const fn new(begin: f32, end: f32, duration: f32) -> Self {
        Self {
            begin,
            end,
            duration,
        }
    }

    pub fn build(&self) -> Result<Segment, AnimError> {
        Segment::new(self.begin, self.end, self.duration)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Crouch played while the jump key is held.
    pub prepare: SegmentSpec,
    /// First jump phase: squash snapping into stretch.
    pub attack: SegmentSpec,
    /// Second jump phase: stretch relaxing back to rest.
    pub recover: SegmentSpec,
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Take-off velocity as a multiple of `gravity` (negative is up).
    pub jump_impulse: f32,
    /// Y coordinate the character rests on.
    pub floor: f32,
    pub start_x: f32,
    /// World extent rendered by the demo, in px.
    pub arena: [f32; 2],
    /// Edge length of the square sprite box.
    pub sprite_size: f32,
    pub master_volume: f32,
    /// Fixed main-loop step in seconds.
    pub timestep: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            prepare: SegmentSpec::new(0.0, 0.2, 0.5),
            attack: SegmentSpec::new(0.2, -0.2, 0.1),
            recover: SegmentSpec::new(-0.2, 0.0, 0.2),
            gravity: 3000.0,
            jump_impulse: -0.5,
            floor: 800.0,
            start_x: 500.0,
            arena: [1000.0, 1000.0],
            sprite_size: 64.0 * 4.0,
            master_volume: 0.2,
            timestep: 1.0 / 60.0,
        }
    }
}

/// Errors raised while loading a [`Tuning`].
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid tuning file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Anim(#[from] AnimError),
    #[error("timestep must be positive and finite, got {0}")]
    Timestep(f32),
}

impl Tuning {
    /// Crouch animation.
    pub fn prepare_animation(&self) -> Result<Segment, AnimError> {
        self.prepare.build()
    }

    /// Attack then recover.
    pub fn jump_animation(&self) -> Result<Sequence<2>, AnimError> {
        Ok(Sequence::new([self.attack.build()?, self.recover.build()?]))
    }

    /// Take-off velocity in px/s.
    pub fn jump_velocity(&self) -> f32 {
        self.gravity * self.jump_impulse
    }

    /// Check every value the demo will build animations from.
    pub fn validate(&self) -> Result<(), TuningError> {
        self.prepare_animation()?;
        self.jump_animation()?;
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(TuningError::Timestep(self.timestep));
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = toml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "loaded tuning");
        Ok(tuning)
    }
}
