use super::SampleBuffer;

/// One playback slot: a sample and how far into it we are.
///
/// A voice has no identity beyond its slot. Once the cursor reaches the end
/// of the sample the slot counts as free again.
#[derive(Debug, Clone, Default)]
pub struct Voice {
    sample: Option<SampleBuffer>,
    cursor: usize,
}

impl Voice {
    /// Start `sample` from its first frame.
    pub fn start(&mut self, sample: SampleBuffer) {
        self.sample = Some(sample);
        self.cursor = 0;
    }

    /// Next sample value, or 0 once exhausted. Advances the cursor.
    #[inline]
    pub fn next_sample(&mut self) -> i16 {
        let Some(sample) = &self.sample else {
            return 0;
        };

        match sample.samples().get(self.cursor) {
            Some(&s) => {
                self.cursor += 1;
                s
            }
            None => 0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.cursor < self.sample_len()
    }

    pub fn is_free(&self) -> bool {
        !self.is_active()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the assigned sample (0 when never started).
    pub fn sample_len(&self) -> usize {
        self.sample.as_ref().map_or(0, SampleBuffer::len)
    }

    pub fn remaining(&self) -> usize {
        self.sample_len() - self.cursor
    }
}
