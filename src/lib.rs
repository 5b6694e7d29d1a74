//! Safe bindings to the libopus decoder.
//!
//! This crate gates the libopus decode API behind a validated PCM
//! format description:
//!
//! - `format`: [`AudioFormat`] and the [`is_valid_format`] predicate
//! - `packet`: [`Packet`], an opaque encoded byte sequence
//! - `buffer`: [`PcmBuffer`], bounds-checked decode output
//! - `decoder`: [`Decoder`], a session owning one native instance
//! - `error`: [`Error`], the libopus status codes as typed variants
//!
//! # Usage
//!
//! ```no_run
//! use opusdec::{Application, AudioFormat, Decoder, Packet, SampleFormat};
//!
//! # fn main() -> Result<(), opusdec::Error> {
//! let format = AudioFormat::stereo(48000, SampleFormat::Float32);
//! let mut decoder = Decoder::new(format, Application::Audio)?;
//!
//! let packet = Packet::from_slice(&[0x4C]); // one encoded Opus packet
//! let pcm = decoder.decode(&packet)?;
//! println!("decoded {} samples per channel", pcm.frame_len());
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! A [`Decoder`] keeps running decode state inside libopus and must not
//! be shared between threads: it is `Send` but not `Sync`, and every
//! operation takes `&mut self`. Independent sessions are fully isolated
//! and may run concurrently. [`AudioFormat`] values are immutable and
//! freely shareable.

mod buffer;
mod decoder;
mod error;
mod ffi;
mod format;
mod packet;

pub use buffer::PcmBuffer;
pub use decoder::{Application, Decoder};
pub use error::Error;
pub use format::{AudioFormat, SampleFormat, is_valid_format};
pub use packet::Packet;
