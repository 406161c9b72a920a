use crate::waveform::{Waveform, WaveformConfig};
use serde::{Deserialize, Serialize};

/// `amplitude × sin(2π f t + φ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SineWave {
    config: WaveformConfig,
}

impl SineWave {
    pub fn new(frequency: f64, amplitude: f64, phase: f64) -> Self {
        Self::from_config(WaveformConfig::new(frequency, amplitude, phase))
    }

    pub fn from_config(config: WaveformConfig) -> Self {
        Self { config }
    }
}

impl Waveform for SineWave {
    fn config(&self) -> &WaveformConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut WaveformConfig {
        &mut self.config
    }

    fn generate(&self, time: f64) -> f64 {
        self.config.amplitude * self.config.angle(time).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::{PI, TAU};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn sine_matches_closed_form_for_random_times() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let f = rng.gen_range(0.1..50.0);
            let a = rng.gen_range(-5.0..5.0);
            let p = rng.gen_range(-TAU..TAU);
            let t = rng.gen_range(-3.0..3.0);
            let wave = SineWave::new(f, a, p);
            assert!(close(wave.generate(t), a * (TAU * f * t + p).sin()));
        }
    }

    #[test]
    fn sine_quarter_period_hits_peak() {
        let wave = SineWave::new(2.0, 3.0, 0.0);
        assert!(close(wave.generate(0.125), 3.0));
        assert!(close(wave.generate(0.375), -3.0));
    }

    #[test]
    fn zero_frequency_is_constant() {
        let wave = SineWave::new(0.0, 2.0, PI / 2.0);
        assert!(close(wave.generate(0.0), 2.0));
        assert!(close(wave.generate(17.5), 2.0));
    }

    #[test]
    fn non_finite_time_propagates_nan() {
        let wave = SineWave::default();
        assert!(wave.generate(f64::NAN).is_nan());
        assert!(wave.generate(f64::INFINITY).is_nan());
    }

    #[test]
    fn setters_replace_config_fields() {
        let mut wave = SineWave::default();
        wave.set_frequency(5.0);
        wave.set_amplitude(-0.5);
        wave.set_phase(7.0);
        assert_eq!(*wave.config(), WaveformConfig::new(5.0, -0.5, 7.0));
    }
}
