use crate::error::{WaveError, WaveResult};
use crate::waveform::{SineWave, SquareWave, Waveform, WaveformConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects a waveform kind without carrying its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveShape {
    #[default]
    Sine,
    Square,
}

impl WaveShape {
    pub const ALL: [WaveShape; 2] = [WaveShape::Sine, WaveShape::Square];

    /// Menu number used by the interactive prompt.
    pub fn choice(self) -> u8 {
        match self {
            WaveShape::Sine => 1,
            WaveShape::Square => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WaveShape::Sine => "Sine Wave",
            WaveShape::Square => "Square Wave",
        }
    }

    pub fn build(self, config: WaveformConfig) -> WaveformKind {
        match self {
            WaveShape::Sine => WaveformKind::Sine(SineWave::from_config(config)),
            WaveShape::Square => WaveformKind::Square(SquareWave::from_config(config)),
        }
    }
}

impl TryFrom<u8> for WaveShape {
    type Error = WaveError;

    fn try_from(choice: u8) -> WaveResult<Self> {
        WaveShape::ALL
            .into_iter()
            .find(|shape| shape.choice() == choice)
            .ok_or_else(|| WaveError::UnknownShape(choice.to_string()))
    }
}

impl FromStr for WaveShape {
    type Err = WaveError;

    fn from_str(s: &str) -> WaveResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(WaveShape::Sine),
            "square" => Ok(WaveShape::Square),
            other => Err(WaveError::UnknownShape(other.to_string())),
        }
    }
}

impl fmt::Display for WaveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveShape::Sine => f.write_str("sine"),
            WaveShape::Square => f.write_str("square"),
        }
    }
}

/// Closed set of waveform kinds known to the configuration layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WaveformKind {
    Sine(SineWave),
    Square(SquareWave),
}

impl WaveformKind {
    pub fn shape(&self) -> WaveShape {
        match self {
            WaveformKind::Sine(_) => WaveShape::Sine,
            WaveformKind::Square(_) => WaveShape::Square,
        }
    }

    fn inner(&self) -> &dyn Waveform {
        match self {
            WaveformKind::Sine(wave) => wave,
            WaveformKind::Square(wave) => wave,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Waveform {
        match self {
            WaveformKind::Sine(wave) => wave,
            WaveformKind::Square(wave) => wave,
        }
    }
}

impl Waveform for WaveformKind {
    fn config(&self) -> &WaveformConfig {
        self.inner().config()
    }

    fn config_mut(&mut self) -> &mut WaveformConfig {
        self.inner_mut().config_mut()
    }

    fn generate(&self, time: f64) -> f64 {
        self.inner().generate(time)
    }
}
