use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wavecore::prelude::{Sampler, Spacing, WaveShape, WaveformConfig, WaveformKind};

pub const DEFAULT_DURATION: f64 = 1.0;
pub const DEFAULT_SAMPLE_RATE: f64 = 1000.0;
pub const DEFAULT_OUTPUT: &str = "waveform.csv";
pub const DEFAULT_TITLE: &str = "Waveform";

/// Where a sampled run goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sink {
    #[default]
    Csv,
    Plot,
}

/// One generation run: which waveform, how to sample it, where to send it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub kind: WaveShape,
    #[serde(flatten)]
    pub waveform: WaveformConfig,
    pub duration: f64,
    pub sample_rate: f64,
    pub spacing: Spacing,
    pub sink: Sink,
    pub output: PathBuf,
    pub title: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            kind: WaveShape::default(),
            waveform: WaveformConfig::default(),
            duration: DEFAULT_DURATION,
            sample_rate: DEFAULT_SAMPLE_RATE,
            spacing: Spacing::default(),
            sink: Sink::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.into(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        kind: WaveShape,
        waveform: WaveformConfig,
        duration: f64,
        sample_rate: f64,
    ) -> Self {
        Self {
            kind,
            waveform,
            duration,
            sample_rate,
            ..Default::default()
        }
    }

    pub fn build_waveform(&self) -> WaveformKind {
        self.kind.build(self.waveform)
    }

    pub fn sampler(&self) -> Sampler {
        Sampler::new(self.spacing)
    }
}
