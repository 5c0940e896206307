use std::collections::VecDeque;

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use super::SampleBuffer;

#[derive(Debug, Clone)]
pub enum MixerMessage {
    Play(SampleBuffer),
    SetVolume(f32),
}

/// Receiving end of the control queue, drained by the mixer at the top of
/// every callback. Implementations must not block or allocate in `pop`.
pub trait MessageReceiver {
    fn pop(&mut self) -> Option<MixerMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<MixerMessage> {
    fn pop(&mut self) -> Option<MixerMessage> {
        Consumer::pop(self).ok()
    }
}

/// Single-threaded queue, handy for offline rendering.
impl MessageReceiver for VecDeque<MixerMessage> {
    fn pop(&mut self) -> Option<MixerMessage> {
        self.pop_front()
    }
}
