//! Realtime sample playback.
//!
//! [`SampleBuffer`]s are loaded once up front. The main thread triggers them
//! through a [`MixerHandle`]; the audio callback owns the [`Mixer`] and calls
//! [`Mixer::mix`] to fill the host buffer. Everything on the callback side is
//! allocation-free and lock-free.

pub mod message;
pub mod mixer;
pub mod sample;
pub mod voice;

pub use message::{MessageReceiver, MixerMessage};
#[cfg(feature = "rtrb")]
pub use mixer::{channel, MixerHandle};
pub use mixer::{Mixer, DEFAULT_QUEUE_CAPACITY};
pub use sample::{SampleBuffer, SampleError};
pub use voice::Voice;
