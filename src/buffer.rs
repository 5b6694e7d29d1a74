//! Decoded PCM output buffer.

use crate::format::AudioFormat;

/// Interleaved float PCM produced by one decode call.
///
/// A buffer is allocated for a fixed number of samples per channel;
/// [`PcmBuffer::frame_len`] reports how many of them the decoder
/// actually wrote, which may be less than the capacity. The decoder
/// never writes past the capacity: the native call is handed exactly
/// the capacity as its frame limit.
#[derive(Debug, Clone)]
pub struct PcmBuffer {
    format: AudioFormat,
    samples: Vec<f32>,
    capacity: usize,
    frame_len: usize,
}

impl PcmBuffer {
    /// Allocates a zeroed buffer holding up to `capacity` samples per
    /// channel, laid out per `format`.
    pub(crate) fn with_capacity(capacity: usize, format: AudioFormat) -> Self {
        Self {
            format,
            samples: vec![0.0; capacity * format.channels as usize],
            capacity,
            frame_len: 0,
        }
    }

    /// Returns the format the samples are laid out in.
    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    /// Returns the maximum samples per channel this buffer can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of samples per channel decoded into this buffer.
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// Returns the decoded samples, interleaved.
    ///
    /// The slice holds `frame_len() * channels` samples; the unwritten
    /// tail of the allocation is not exposed.
    pub fn samples(&self) -> &[f32] {
        &self.samples[..self.frame_len * self.format.channels as usize]
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut f32 {
        self.samples.as_mut_ptr()
    }

    /// Records the decoded sample count. Must not exceed the capacity.
    pub(crate) fn set_frame_len(&mut self, frame_len: usize) {
        assert!(frame_len <= self.capacity);
        self.frame_len = frame_len;
    }
}
