pub mod anim; // Squash-and-stretch segments and phase sequences
pub mod audio; // Sample buffers, voices, realtime mixer
pub mod geom;
pub mod tuning; // Timing and physics constants for the demo

/// Output rate of every sample buffer and of the audio callback.
pub const SAMPLE_RATE: u32 = 48_000;
/// Mono output.
pub const CHANNELS: u16 = 1;
/// Frames requested from the host per audio callback.
pub const FRAMES_PER_CALLBACK: usize = 4096;
/// Number of sounds that can play at once in the default mixer.
pub const DEFAULT_VOICE_CAPACITY: usize = 5;
