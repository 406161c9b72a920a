pub use crate::error::{WaveError, WaveResult};
pub use crate::math::StatsHelper;
pub use crate::sampling::{sample, SampleSet, Sampler, Spacing};
pub use crate::waveform::{
    SineWave, SquareWave, WaveShape, Waveform, WaveformConfig, WaveformKind,
};
