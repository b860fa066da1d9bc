//! Bytebeat Synthesis Core
//!
//! This crate generates short procedural waveforms and serializes them as
//! canonical PCM WAV files:
//!
//! - **Waveform generator** - five formula variants ([`Formula`]): a pure
//!   220 Hz sine tone plus four closed-form integer "bytebeat" expressions
//!   evaluated with 32-bit two's-complement wrapping semantics.
//! - **WAV encoder** - byte-exact RIFF/WAVE emission (44-byte header,
//!   8-bit mono PCM) into a single byte buffer.
//!
//! # Determinism
//!
//! Both stages are pure functions of their inputs. Rendering the same
//! `(formula, format)` twice yields byte-identical output; [`WavResult`]
//! carries a BLAKE3 hash of the PCM data so callers can assert this
//! cheaply.
//!
//! # Example
//!
//! ```
//! use bytebeat_synth::{render, AudioFormat, Formula};
//!
//! let result = render(Formula::Tunnel, &AudioFormat::mono8(8000, 1))?;
//! assert_eq!(result.wav.wav_data.len(), 44 + 8000);
//! // std::fs::write("tunnel.wav", &result.wav.wav_data)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] / [`render()`] - main entry points
//! - [`formula`] - the five formula variants and their default formats
//! - [`format`] - PCM format parameters and validation
//! - [`wav`] - canonical WAV writer and PCM inspection helpers
//! - [`error`] - format and encoding error types

pub mod error;
pub mod format;
pub mod formula;
pub mod generate;
pub mod wav;

// Re-export main types at crate root
pub use error::{EncodeError, FormatError};
pub use format::AudioFormat;
pub use formula::Formula;
pub use generate::{generate, render, render_default, RenderResult};
pub use wav::{encode, WavResult};
