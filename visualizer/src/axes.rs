use wavecore::SampleSet;

/// Data-space extent of a plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub t_min: f64,
    pub t_max: f64,
    pub a_min: f64,
    pub a_max: f64,
}

impl PlotBounds {
    /// Extent of the finite samples, padded so flat or empty data still has area.
    pub fn from_samples(samples: &SampleSet) -> Self {
        let mut bounds = Self {
            t_min: f64::INFINITY,
            t_max: f64::NEG_INFINITY,
            a_min: f64::INFINITY,
            a_max: f64::NEG_INFINITY,
        };
        for (t, a) in samples.iter() {
            if !t.is_finite() || !a.is_finite() {
                continue;
            }
            bounds.t_min = bounds.t_min.min(t);
            bounds.t_max = bounds.t_max.max(t);
            bounds.a_min = bounds.a_min.min(a);
            bounds.a_max = bounds.a_max.max(a);
        }
        if bounds.t_min > bounds.t_max {
            return Self::default();
        }
        if bounds.t_max - bounds.t_min <= f64::EPSILON {
            bounds.t_max = bounds.t_min + 1.0;
        }
        if bounds.a_max - bounds.a_min <= f64::EPSILON {
            bounds.a_min -= 1.0;
            bounds.a_max += 1.0;
        } else {
            let margin = (bounds.a_max - bounds.a_min) * 0.05;
            bounds.a_min -= margin;
            bounds.a_max += margin;
        }
        bounds
    }

    /// Maps a data point into a `width × height` area with y growing downwards.
    pub fn project(&self, t: f64, a: f64, width: f32, height: f32) -> (f32, f32) {
        let x = (t - self.t_min) / (self.t_max - self.t_min) * width as f64;
        let y = height as f64 - (a - self.a_min) / (self.a_max - self.a_min) * height as f64;
        (x as f32, y as f32)
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: 1.0,
            a_min: -1.0,
            a_max: 1.0,
        }
    }
}

/// Round tick positions covering `[min, max]`, roughly `target` of them.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min || target == 0 {
        return Vec::new();
    }
    let raw = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);
    let scale = 10f64.powi(1 - step.log10().floor() as i32);

    let mut ticks = Vec::new();
    let mut i = (min / step).ceil() as i64;
    loop {
        let value = i as f64 * step;
        if value > max + step * 1e-9 {
            break;
        }
        // snap values like 0.6000000000000001
        ticks.push((value * scale).round() / scale);
        i += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::prelude::{sample, SineWave, SquareWave};

    #[test]
    fn bounds_cover_the_samples_with_margin() {
        let set = sample(&SineWave::new(1.0, 2.0, 0.0), 1.0, 100.0);
        let bounds = PlotBounds::from_samples(&set);
        assert_eq!(bounds.t_min, 0.0);
        assert!((bounds.t_max - 1.0).abs() < 1e-12);
        assert!(bounds.a_min < -1.99 && bounds.a_min > -2.3);
        assert!(bounds.a_max > 1.99 && bounds.a_max < 2.3);
    }

    #[test]
    fn flat_or_empty_data_still_has_area() {
        let empty = sample(&SineWave::default(), 0.0, 10.0);
        assert_eq!(PlotBounds::from_samples(&empty), PlotBounds::default());

        let flat = sample(&SquareWave::new(0.0, 1.0, 0.0), 1.0, 10.0);
        let bounds = PlotBounds::from_samples(&flat);
        assert_eq!((bounds.a_min, bounds.a_max), (-1.0, 1.0));
    }

    #[test]
    fn projection_flips_the_amplitude_axis() {
        let bounds = PlotBounds::default();
        assert_eq!(bounds.project(0.0, 1.0, 200.0, 100.0), (0.0, 0.0));
        assert_eq!(bounds.project(1.0, -1.0, 200.0, 100.0), (200.0, 100.0));
        assert_eq!(bounds.project(0.5, 0.0, 200.0, 100.0), (100.0, 50.0));
    }

    #[test]
    fn ticks_land_on_round_values() {
        assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(nice_ticks(-2.2, 2.2, 4), vec![-2.0, 0.0, 2.0]);
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
    }
}
