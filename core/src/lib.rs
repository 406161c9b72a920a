//! Waveform generation and sampling core.
//!
//! A [`Waveform`] maps time to amplitude; the [`sampling`] module lays an
//! evenly spaced time grid over a duration and evaluates a waveform on it.
//! Writing and plotting the resulting [`SampleSet`] live outside this crate.

pub mod error;
pub mod math;
pub mod prelude;
pub mod sampling;
pub mod waveform;

pub use prelude::{sample, SampleSet, Waveform, WaveformConfig, WaveformKind};
