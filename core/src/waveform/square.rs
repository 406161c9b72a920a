use crate::waveform::{Waveform, WaveformConfig};
use serde::{Deserialize, Serialize};

/// `amplitude × sign(sin(2π f t + φ))`.
///
/// At exact zero crossings of the underlying sine the output is `0`, not
/// `±amplitude`, so a sampled square wave may contain zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SquareWave {
    config: WaveformConfig,
}

impl SquareWave {
    pub fn new(frequency: f64, amplitude: f64, phase: f64) -> Self {
        Self::from_config(WaveformConfig::new(frequency, amplitude, phase))
    }

    pub fn from_config(config: WaveformConfig) -> Self {
        Self { config }
    }
}

/// Sign of `sin(2π × turns)`, taken from the position within the cycle so
/// that half-cycle boundaries come out as exact zeros.
fn sine_sign(turns: f64) -> f64 {
    let mut position = turns - turns.floor();
    if position.is_nan() {
        return f64::NAN;
    }
    // tiny negative turns can round up to a full cycle
    if position >= 1.0 {
        position = 0.0;
    }
    if position == 0.0 || position == 0.5 {
        0.0
    } else if position < 0.5 {
        1.0
    } else {
        -1.0
    }
}

impl Waveform for SquareWave {
    fn config(&self) -> &WaveformConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut WaveformConfig {
        &mut self.config
    }

    fn generate(&self, time: f64) -> f64 {
        self.config.amplitude * sine_sign(self.config.turns(time))
    }
}
