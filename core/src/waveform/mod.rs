//! Periodic waveform generators.
//!
//! [`Waveform`] is the single capability every kind provides: evaluate the
//! instantaneous amplitude at a time in seconds. New kinds only need a
//! `generate` rule; configuration and the setters come with the trait.

pub mod config;
pub mod kind;
pub mod sine;
pub mod square;

use ndarray::Array1;

pub use config::WaveformConfig;
pub use kind::{WaveShape, WaveformKind};
pub use sine::SineWave;
pub use square::SquareWave;

/// Amplitude-versus-time generator parameterized by a [`WaveformConfig`].
pub trait Waveform {
    fn config(&self) -> &WaveformConfig;

    fn config_mut(&mut self) -> &mut WaveformConfig;

    /// Instantaneous amplitude at `time` seconds. Total over finite input;
    /// NaN and infinities propagate as NaN.
    fn generate(&self, time: f64) -> f64;

    /// Evaluates [`Waveform::generate`] at every time, preserving order.
    fn generate_all(&self, times: &Array1<f64>) -> Array1<f64> {
        times.mapv(|t| self.generate(t))
    }

    fn set_frequency(&mut self, frequency: f64) {
        self.config_mut().frequency = frequency;
    }

    fn set_amplitude(&mut self, amplitude: f64) {
        self.config_mut().amplitude = amplitude;
    }

    fn set_phase(&mut self, phase: f64) {
        self.config_mut().phase = phase;
    }
}
