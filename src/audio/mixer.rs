#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};
#[cfg(feature = "rtrb")]
use tracing::debug;

use super::{
    message::{MessageReceiver, MixerMessage},
    SampleBuffer, Voice,
};
use crate::DEFAULT_VOICE_CAPACITY;

/*
Fixed-Capacity Sample Mixer
===========================

The mixer plays up to N one-shot samples at once and sums them into the
host's output buffer.

Vocabulary
----------

  voice       One playback slot. Holds a sample and a cursor into it. A slot
              whose cursor reached the end is free again.

  trigger     Start a sample in the first free slot. With every slot busy
              the trigger is dropped. Nothing is queued or stolen.

  master      A final gain in [0, 1] applied after summing.


Threads
-------

    main thread                          audio thread
    ───────────                          ────────────
    MixerHandle::trigger ──┐
    MixerHandle::set_..  ──┼── SPSC ──→  Mixer::mix
                           │   queue       1. drain queue into voices
                                           2. sum voices into output

The voice array is owned by the audio thread. The main thread only sends
messages, so a slot's sample, length and cursor change together inside
mix() and are never observed half-written.


The Math
--------

For each output frame:

    total  = Σ voice.next_sample()              (i32, no wrap)
    mixed  = clamp(total, i16::MIN, i16::MAX)
    out    = (mixed × master) as i16            (truncates toward zero)

Work per callback is O(N × frames); nothing allocates, locks or blocks.
*/

/// Default depth of the trigger queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Audio-thread side of the mixer.
pub struct Mixer<R, const N: usize = DEFAULT_VOICE_CAPACITY> {
    voices: [Voice; N],
    volume: f32,
    rx: R,
}

impl<R: MessageReceiver, const N: usize> Mixer<R, N> {
    pub fn new(rx: R) -> Self {
        Self {
            voices: std::array::from_fn(|_| Voice::default()),
            volume: 1.0,
            rx,
        }
    }

    /// Start `sample` in the first free slot. Silently dropped when every
    /// slot is busy.
    pub fn trigger(&mut self, sample: SampleBuffer) {
        if let Some(voice) = self.voices.iter_mut().find(|v| v.is_free()) {
            voice.start(sample);
        }
    }

    /// Set the master gain, clamped into [0, 1].
    pub fn set_master_volume(&mut self, volume: f32) {
        self.volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 1.0)
        };
    }

    /// Fill `out` with the next `out.len()` frames. Every element is
    /// overwritten.
    pub fn mix(&mut self, out: &mut [i16]) {
        self.drain_messages();

        for frame in out.iter_mut() {
            *frame = self.next_frame();
        }
    }

    /// Same as [`mix`](Self::mix) for a raw host buffer holding 16-bit
    /// little-endian samples. A trailing odd byte is zeroed.
    pub fn mix_le_bytes(&mut self, out: &mut [u8]) {
        self.drain_messages();

        let mut frames = out.chunks_exact_mut(2);
        for frame in &mut frames {
            frame.copy_from_slice(&self.next_frame().to_le_bytes());
        }
        frames.into_remainder().fill(0);
    }

    fn drain_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                MixerMessage::Play(sample) => self.trigger(sample),
                MixerMessage::SetVolume(volume) => self.set_master_volume(volume),
            }
        }
    }

    #[inline]
    fn next_frame(&mut self) -> i16 {
        let mut total: i32 = 0;
        for voice in &mut self.voices {
            if voice.is_active() {
                total += i32::from(voice.next_sample());
            }
        }

        let mixed = total.clamp(i16::MIN.into(), i16::MAX.into()) as i16;
        (f32::from(mixed) * self.volume) as i16
    }

    pub fn voices(&self) -> &[Voice; N] {
        &self.voices
    }

    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn master_volume(&self) -> f32 {
        self.volume
    }
}

/// Main-thread side of the mixer. Sends triggers and volume changes to the
/// [`Mixer`] without ever blocking.
#[cfg(feature = "rtrb")]
pub struct MixerHandle {
    tx: Producer<MixerMessage>,
}

#[cfg(feature = "rtrb")]
impl MixerHandle {
    /// Ask the mixer to play `sample`. Dropped if the queue is full or, once
    /// drained, if every voice is busy.
    pub fn trigger(&mut self, sample: &SampleBuffer) {
        if self.tx.push(MixerMessage::Play(sample.clone())).is_err() {
            debug!("mixer queue full, dropping trigger");
        }
    }

    pub fn set_master_volume(&mut self, volume: f32) {
        if self.tx.push(MixerMessage::SetVolume(volume)).is_err() {
            debug!(volume, "mixer queue full, dropping volume change");
        }
    }
}

/// Build a connected handle/mixer pair with room for `queue_capacity`
/// pending messages.
#[cfg(feature = "rtrb")]
pub fn channel<const N: usize>(
    queue_capacity: usize,
) -> (MixerHandle, Mixer<Consumer<MixerMessage>, N>) {
    let (tx, rx) = RingBuffer::new(queue_capacity);
    (MixerHandle { tx }, Mixer::new(rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    type TestMixer<const N: usize> = Mixer<VecDeque<MixerMessage>, N>;

    fn constant(value: i16, len: usize) -> SampleBuffer {
        SampleBuffer::from(vec![value; len])
    }

    #[test]
    fn single_voice_scaled_by_master() {
        let mut mixer = TestMixer::<2>::new(VecDeque::new());
        mixer.set_master_volume(0.5);
        mixer.trigger(constant(1000, 4));

        let mut out = [0i16; 4];
        mixer.mix(&mut out);

        assert_eq!(out, [500, 500, 500, 500]);
        assert_eq!(mixer.active_voices(), 0);
    }

    #[test]
    fn extra_triggers_are_dropped() {
        let mut mixer = TestMixer::<5>::new(VecDeque::new());
        for i in 0..6 {
            mixer.trigger(constant(1 << i, 16));
        }

        let mut out = [0i16; 1];
        mixer.mix(&mut out);

        assert_eq!(mixer.active_voices(), 5);
        assert_eq!(out[0], 1 + 2 + 4 + 8 + 16);
    }

    #[test]
    fn sum_is_clamped_once() {
        let mut mixer = TestMixer::<3>::new(VecDeque::new());
        mixer.trigger(constant(30_000, 2));
        mixer.trigger(constant(30_000, 2));
        mixer.trigger(constant(-30_000, 2));

        let mut out = [0i16; 2];
        mixer.mix(&mut out);

        // 30000 + 30000 - 30000 in i32 never saturates.
        assert_eq!(out, [30_000, 30_000]);
    }

    #[test]
    fn clamps_to_i16_range() {
        let mut mixer = TestMixer::<2>::new(VecDeque::new());
        mixer.trigger(constant(30_000, 1));
        mixer.trigger(constant(30_000, 1));
        let mut out = [0i16; 1];
        mixer.mix(&mut out);
        assert_eq!(out[0], i16::MAX);

        mixer.trigger(constant(i16::MIN, 1));
        mixer.trigger(constant(-1, 1));
        mixer.mix(&mut out);
        assert_eq!(out[0], i16::MIN);
    }

    #[test]
    fn volume_truncates_toward_zero() {
        let mut mixer = TestMixer::<1>::new(VecDeque::new());
        mixer.set_master_volume(0.3);
        mixer.trigger(SampleBuffer::from(vec![1001, -1001]));

        let mut out = [0i16; 2];
        mixer.mix(&mut out);

        assert_eq!(out, [300, -300]);
    }

    #[test]
    fn exhausted_voice_goes_silent_mid_buffer() {
        let mut mixer = TestMixer::<2>::new(VecDeque::new());
        mixer.trigger(SampleBuffer::from(vec![7, 8]));

        let mut out = [123i16; 4];
        mixer.mix(&mut out);

        assert_eq!(out, [7, 8, 0, 0]);
        assert_eq!(mixer.voices()[0].cursor(), 2);
    }

    #[test]
    fn finished_slot_is_reused() {
        let mut mixer = TestMixer::<1>::new(VecDeque::new());
        mixer.trigger(constant(1, 1));
        mixer.trigger(constant(2, 1));
        let mut out = [0i16; 1];
        mixer.mix(&mut out);
        assert_eq!(out[0], 1);

        mixer.trigger(constant(3, 1));
        mixer.mix(&mut out);
        assert_eq!(out[0], 3);
    }

    #[test]
    fn queued_messages_apply_before_mixing() {
        let mut queue = VecDeque::new();
        queue.push_back(MixerMessage::SetVolume(0.5));
        queue.push_back(MixerMessage::Play(constant(100, 2)));
        let mut mixer = TestMixer::<2>::new(queue);

        let mut out = [0i16; 2];
        mixer.mix(&mut out);

        assert_eq!(out, [50, 50]);
        assert_eq!(mixer.master_volume(), 0.5);
    }

    #[test]
    fn master_volume_is_clamped() {
        let mut mixer = TestMixer::<1>::new(VecDeque::new());
        mixer.set_master_volume(3.0);
        assert_eq!(mixer.master_volume(), 1.0);
        mixer.set_master_volume(-1.0);
        assert_eq!(mixer.master_volume(), 0.0);
        mixer.set_master_volume(f32::NAN);
        assert_eq!(mixer.master_volume(), 0.0);
    }

    #[test]
    fn byte_buffer_is_little_endian_and_fully_overwritten() {
        let mut mixer = TestMixer::<1>::new(VecDeque::new());
        mixer.trigger(SampleBuffer::from(vec![0x0102, -2]));

        let mut out = [0xAAu8; 7];
        mixer.mix_le_bytes(&mut out);

        assert_eq!(out, [0x02, 0x01, 0xFE, 0xFF, 0x00, 0x00, 0x00]);
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn handle_feeds_mixer_through_queue() {
        let (mut handle, mut mixer) = channel::<5>(8);
        let sample = constant(10, 3);
        handle.set_master_volume(1.0);
        handle.trigger(&sample);
        handle.trigger(&sample);

        assert_eq!(mixer.active_voices(), 0);

        let mut out = [0i16; 3];
        mixer.mix(&mut out);
        assert_eq!(out, [20, 20, 20]);
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn full_queue_drops_silently() {
        let (mut handle, mut mixer) = channel::<5>(2);
        let sample = constant(1, 4);
        for _ in 0..4 {
            handle.trigger(&sample);
        }

        let mut out = [0i16; 1];
        mixer.mix(&mut out);
        assert_eq!(mixer.active_voices(), 2);
    }
}
