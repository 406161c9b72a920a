use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Shared parameters of every waveform kind.
///
/// Values are stored as given: no range checks, any phase in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    /// Cycles per second.
    pub frequency: f64,
    /// Peak value.
    pub amplitude: f64,
    /// Offset in radians.
    pub phase: f64,
}

impl WaveformConfig {
    pub fn new(frequency: f64, amplitude: f64, phase: f64) -> Self {
        Self {
            frequency,
            amplitude,
            phase,
        }
    }

    /// Argument of the underlying sine, `2π f t + φ`.
    pub fn angle(&self, time: f64) -> f64 {
        TAU * self.frequency * time + self.phase
    }

    /// Position within the cycle at `time`, in whole turns (`f t + φ / 2π`).
    pub fn turns(&self, time: f64) -> f64 {
        self.frequency * time + self.phase / TAU
    }
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            amplitude: 1.0,
            phase: 0.0,
        }
    }
}
