//! Opus decoder session.

use std::os::raw::c_int;
use std::ptr;

use crate::buffer::PcmBuffer;
use crate::error::{Error, check};
use crate::ffi::{self, OpusDecoder as OpusDecoderHandle};
use crate::format::{AudioFormat, is_valid_format};
use crate::packet::Packet;

/// Intended use of the codec.
///
/// Tuning for the hint is owned by libopus; the decoder side carries
/// no state for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Application {
    /// Best quality for voice signals.
    Voip,
    /// Best quality for non-voice signals.
    #[default]
    Audio,
    /// Minimum possible coding delay.
    RestrictedLowdelay,
}

impl Application {
    /// Returns the native application identifier.
    pub fn raw(&self) -> i32 {
        match self {
            Self::Voip => ffi::OPUS_APPLICATION_VOIP,
            Self::Audio => ffi::OPUS_APPLICATION_AUDIO,
            Self::RestrictedLowdelay => ffi::OPUS_APPLICATION_RESTRICTED_LOWDELAY,
        }
    }
}

/// Opus decoder session.
///
/// Owns one libopus decoder instance and the validated [`AudioFormat`]
/// it was created for. The instance is released when the session is
/// dropped.
pub struct Decoder {
    format: AudioFormat,
    handle: *mut OpusDecoderHandle,
}

// Safety: the decoder handle is not shared across threads. Every
// operation takes `&mut self`, so a session is never used concurrently.
unsafe impl Send for Decoder {}

impl Drop for Decoder {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe { ffi::opus_decoder_destroy(self.handle) };
            self.handle = ptr::null_mut();
        }
    }
}

impl Decoder {
    /// Creates a new decoder session for `format`.
    ///
    /// The format is checked with [`is_valid_format`] first; a rejected
    /// format fails with [`Error::BadArg`] before libopus is touched.
    /// The application hint is not consulted by the decoder side of the
    /// codec and is accepted only for symmetry with encoder creation.
    pub fn new(format: AudioFormat, _application: Application) -> Result<Self, Error> {
        if !is_valid_format(&format) {
            return Err(Error::BadArg);
        }

        let mut error: c_int = ffi::OPUS_OK;
        let handle = unsafe {
            ffi::opus_decoder_create(
                format.sample_rate as i32,
                format.channels as c_int,
                &mut error,
            )
        };

        if error != ffi::OPUS_OK || handle.is_null() {
            // A handle returned alongside a non-OK status must not leak.
            if !handle.is_null() {
                unsafe { ffi::opus_decoder_destroy(handle) };
            }
            return Err(if error != ffi::OPUS_OK {
                Error::from_raw(error)
            } else {
                Error::AllocFail
            });
        }

        Ok(Self { format, handle })
    }

    /// Returns the format this session decodes into.
    pub fn format(&self) -> &AudioFormat {
        &self.format
    }

    /// Returns the sample rate.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Returns the number of channels.
    pub fn channels(&self) -> u32 {
        self.format.channels
    }

    /// Re-initializes the decoder to its startup state, discarding any
    /// accumulated decode history.
    ///
    /// On failure the session stays callable, but its state is
    /// undefined; callers may retry or recreate.
    pub fn reset(&mut self) -> Result<(), Error> {
        let ret = unsafe {
            ffi::opus_decoder_init(
                self.handle,
                self.format.sample_rate as i32,
                self.format.channels as c_int,
            )
        };
        check(ret)
    }

    /// Decodes one packet to PCM.
    ///
    /// The output buffer is sized from the packet header before the
    /// full decode runs. `frame_len` of the returned buffer may be
    /// smaller than that capacity. Failures leave the session usable;
    /// the packet decides the error kind (a malformed header surfaces
    /// as [`Error::InvalidPacket`]).
    pub fn decode(&mut self, packet: &Packet) -> Result<PcmBuffer, Error> {
        let data = packet.as_bytes();
        let (data_ptr, data_len) = if data.is_empty() {
            (ptr::null(), 0)
        } else {
            (data.as_ptr(), data.len() as i32)
        };

        let sample_count =
            unsafe { ffi::opus_decoder_get_nb_samples(self.handle, data_ptr, data_len) };
        if sample_count < 0 {
            return Err(Error::from_raw(sample_count));
        }

        let mut output = PcmBuffer::with_capacity(sample_count as usize, self.format);
        let decoded = unsafe {
            ffi::opus_decode_float(
                self.handle,
                data_ptr,
                data_len,
                output.as_mut_ptr(),
                sample_count,
                0, // decode_fec
            )
        };
        if decoded < 0 {
            return Err(Error::from_raw(decoded));
        }

        output.set_frame_len(decoded as usize);
        Ok(output)
    }
}
