//! Built-in jump sound for when no WAV is supplied.

use std::f32::consts::TAU;

use boing::{audio::SampleBuffer, SAMPLE_RATE};

const LENGTH_SECS: f32 = 0.3;
const START_HZ: f32 = 180.0;
const END_HZ: f32 = 720.0;
const PEAK: f32 = 0.6;

/// Upward sine chirp with a linear fade-out.
pub fn boing() -> SampleBuffer {
    let sample_rate = SAMPLE_RATE as f32;
    let frames = (LENGTH_SECS * sample_rate) as usize;
    let mut phase = 0.0f32;

    let samples: Vec<i16> = (0..frames)
        .map(|i| {
            let progress = i as f32 / frames as f32;
            let freq = START_HZ + (END_HZ - START_HZ) * progress;
            phase = (phase + TAU * freq / sample_rate) % TAU;

            let level = PEAK * (1.0 - progress);
            (phase.sin() * level * i16::MAX as f32) as i16
        })
        .collect();

    SampleBuffer::from(samples)
}
