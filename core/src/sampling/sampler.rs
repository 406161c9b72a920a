use crate::error::{WaveError, WaveResult};
use crate::sampling::SampleSet;
use crate::waveform::Waveform;
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the time grid is laid over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    /// First point at 0, last point at `duration`.
    #[default]
    Inclusive,
    /// Points over `[0, duration)` with step `duration / count`.
    HalfOpen,
}

impl FromStr for Spacing {
    type Err = WaveError;

    fn from_str(s: &str) -> WaveResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inclusive" => Ok(Spacing::Inclusive),
            "half-open" | "halfopen" => Ok(Spacing::HalfOpen),
            other => Err(WaveError::UnknownSpacing(other.to_string())),
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::Inclusive => f.write_str("inclusive"),
            Spacing::HalfOpen => f.write_str("half-open"),
        }
    }
}

/// Builds time grids and evaluates waveforms on them.
///
/// Inputs are unchecked: a non-positive duration or rate yields an empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sampler {
    spacing: Spacing,
}

impl Sampler {
    pub fn new(spacing: Spacing) -> Self {
        Self { spacing }
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// `floor(sample_rate × duration)`, or 0 when that is not a finite positive number.
    pub fn sample_count(duration: f64, sample_rate: f64) -> usize {
        let product = sample_rate * duration;
        if product.is_finite() && product > 0.0 {
            product.floor() as usize
        } else {
            0
        }
    }

    pub fn time_grid(&self, duration: f64, sample_rate: f64) -> Array1<f64> {
        let count = Self::sample_count(duration, sample_rate);
        match self.spacing {
            Spacing::Inclusive => Array1::linspace(0.0, duration, count),
            Spacing::HalfOpen => {
                let step = duration / count as f64;
                Array1::from_shape_fn(count, |i| i as f64 * step)
            }
        }
    }

    pub fn sample<W>(&self, waveform: &W, duration: f64, sample_rate: f64) -> SampleSet
    where
        W: Waveform + ?Sized,
    {
        let times = self.time_grid(duration, sample_rate);
        let amplitudes = waveform.generate_all(&times);
        debug!(
            "sampled {} points over {}s at {} Hz ({:?})",
            times.len(),
            duration,
            sample_rate,
            self.spacing
        );
        SampleSet::new(times, amplitudes)
    }
}

/// Samples `waveform` with the default [`Spacing`].
pub fn sample<W>(waveform: &W, duration: f64, sample_rate: f64) -> SampleSet
where
    W: Waveform + ?Sized,
{
    Sampler::default().sample(waveform, duration, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::{SineWave, SquareWave, WaveShape, WaveformConfig};
    use std::f64::consts::PI;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn assert_uniform(times: &Array1<f64>) {
        let step = times[1] - times[0];
        assert!(step > 0.0);
        for pair in times.windows(2) {
            assert!(pair[1] > pair[0]);
            assert!(close(pair[1] - pair[0], step));
        }
    }

    #[test]
    fn count_is_floor_of_rate_times_duration() {
        assert_eq!(Sampler::sample_count(1.0, 1000.0), 1000);
        assert_eq!(Sampler::sample_count(0.25, 10.0), 2);
        assert_eq!(Sampler::sample_count(1.5, 3.0), 4);
    }

    #[test]
    fn degenerate_inputs_yield_empty_sets() {
        let wave = SineWave::default();
        assert!(sample(&wave, 0.0, 1000.0).is_empty());
        assert!(sample(&wave, -1.0, 1000.0).is_empty());
        assert!(sample(&wave, 1.0, 0.0).is_empty());
        assert!(sample(&wave, 1.0, -5.0).is_empty());
        assert!(sample(&wave, f64::NAN, 10.0).is_empty());
        assert!(sample(&wave, f64::INFINITY, 10.0).is_empty());
    }

    #[test]
    fn single_point_sits_at_zero() {
        let set = sample(&SineWave::default(), 1.0, 1.0);
        assert_eq!(set.times().to_vec(), vec![0.0]);
        assert_eq!(set.amplitudes().to_vec(), vec![0.0]);
    }

    #[test]
    fn inclusive_grid_spans_both_endpoints() {
        let set = sample(&SineWave::new(1.0, 1.0, 0.0), 1.0, 4.0);
        let times = set.times();
        assert_eq!(set.len(), 4);
        let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
        for (t, e) in times.iter().zip(expected) {
            assert!(close(*t, e));
        }
        let amps = set.amplitudes();
        let expected = [
            0.0,
            (2.0 * PI / 3.0).sin(),
            (4.0 * PI / 3.0).sin(),
            0.0,
        ];
        for (a, e) in amps.iter().zip(expected) {
            assert!(close(*a, e));
        }
        assert!(close(amps[1], 0.8660254037844386));
        assert!(close(amps[2], -0.8660254037844386));
    }

    #[test]
    fn half_open_grid_excludes_duration() {
        let sampler = Sampler::new(Spacing::HalfOpen);
        let set = sampler.sample(&SineWave::default(), 1.0, 4.0);
        assert_eq!(set.times().to_vec(), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(set.step(), Some(0.25));
    }

    #[test]
    fn spacing_parses_from_names() {
        assert_eq!("half-open".parse::<Spacing>().unwrap(), Spacing::HalfOpen);
        assert_eq!("Inclusive".parse::<Spacing>().unwrap(), Spacing::Inclusive);
        assert!("centered".parse::<Spacing>().is_err());
    }

    #[test]
    fn grids_are_strictly_increasing_and_uniform() {
        for spacing in [Spacing::Inclusive, Spacing::HalfOpen] {
            let set = Sampler::new(spacing).sample(&SineWave::default(), 0.73, 997.0);
            assert_eq!(set.len(), (0.73f64 * 997.0).floor() as usize);
            assert_uniform(set.times());
        }
    }

    #[test]
    fn amplitudes_match_direct_generation() {
        let config = WaveformConfig::new(3.7, 1.3, 0.4);
        for shape in WaveShape::ALL {
            let wave = shape.build(config);
            let set = sample(&wave, 2.0, 250.0);
            assert_eq!(set.amplitudes().len(), set.times().len());
            for (t, a) in set.iter() {
                assert_eq!(a, wave.generate(t));
            }
        }
    }

    #[test]
    fn resampling_reflects_only_new_config() {
        let mut wave = SquareWave::new(1.0, 1.0, 0.0);
        let first = sample(&wave, 1.0, 100.0);
        wave.set_amplitude(3.0);
        wave.set_frequency(2.0);
        wave.set_phase(PI);
        let second = sample(&wave, 1.0, 100.0);

        let fresh = SquareWave::new(2.0, 3.0, PI);
        for (t, a) in second.iter() {
            assert_eq!(a, fresh.generate(t));
        }
        for (t, a) in first.iter() {
            assert_eq!(a, SquareWave::new(1.0, 1.0, 0.0).generate(t));
        }
    }

    #[test]
    fn sampler_accepts_trait_objects() {
        let wave: Box<dyn Waveform> = Box::new(SineWave::new(2.0, 1.0, 0.0));
        let set = sample(wave.as_ref(), 0.5, 8.0);
        assert_eq!(set.len(), 4);
    }
}
