use ndarray::Array1;

/// Paired time grid and amplitudes produced by one sampling call.
///
/// `amplitudes[i]` belongs to `times[i]`. The set is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    times: Array1<f64>,
    amplitudes: Array1<f64>,
}

impl SampleSet {
    pub(crate) fn new(times: Array1<f64>, amplitudes: Array1<f64>) -> Self {
        debug_assert_eq!(times.len(), amplitudes.len());
        Self { times, amplitudes }
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn amplitudes(&self) -> &Array1<f64> {
        &self.amplitudes
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Spacing between consecutive times, `None` with fewer than two points.
    pub fn step(&self) -> Option<f64> {
        if self.len() < 2 {
            return None;
        }
        Some(self.times[1] - self.times[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.amplitudes.iter().copied())
    }

    pub fn into_parts(self) -> (Array1<f64>, Array1<f64>) {
        (self.times, self.amplitudes)
    }
}
