//! Benchmarks for filling one audio callback.

use std::{collections::VecDeque, hint::black_box};

use boing::{
    audio::{Mixer, MixerMessage, SampleBuffer},
    DEFAULT_VOICE_CAPACITY, SAMPLE_RATE,
};
use criterion::{BenchmarkId, Criterion};

use crate::CALLBACK_SIZES;

type BenchMixer = Mixer<VecDeque<MixerMessage>, DEFAULT_VOICE_CAPACITY>;

/// Keep `busy` voices playing, restarting any that ran out.
fn keep_busy(mixer: &mut BenchMixer, sample: &SampleBuffer, busy: usize) {
    while mixer.active_voices() < busy {
        mixer.trigger(sample.clone());
    }
}

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixer");

    // One second of a loud square-ish wave so clamping gets exercised.
    let sample = SampleBuffer::from(
        (0..SAMPLE_RATE as usize)
            .map(|i| if (i / 64) % 2 == 0 { 20_000 } else { -20_000 })
            .collect::<Vec<i16>>(),
    );

    for &size in CALLBACK_SIZES {
        let mut out = vec![0i16; size];
        let mut bytes = vec![0u8; size * 2];

        for busy in [0, 1, DEFAULT_VOICE_CAPACITY] {
            let mut mixer = BenchMixer::new(VecDeque::new());
            mixer.set_master_volume(0.2);

            group.bench_with_input(
                BenchmarkId::new(format!("{busy}_voices"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        keep_busy(&mut mixer, &sample, busy);
                        mixer.mix(black_box(&mut out));
                    })
                },
            );
        }

        let mut mixer = BenchMixer::new(VecDeque::new());
        group.bench_with_input(BenchmarkId::new("le_bytes", size), &size, |b, _| {
            b.iter(|| {
                keep_busy(&mut mixer, &sample, DEFAULT_VOICE_CAPACITY);
                mixer.mix_le_bytes(black_box(&mut bytes));
            })
        });
    }

    group.finish();
}
