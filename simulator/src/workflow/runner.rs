use crate::export::csv;
use crate::workflow::config::{Sink, WorkflowConfig};
use anyhow::anyhow;
use log::info;
use wavecore::prelude::{SampleSet, StatsHelper, WaveformKind};

pub struct WorkflowResult {
    pub waveform: WaveformKind,
    pub samples: SampleSet,
    pub rms: f64,
    pub peak: f64,
    pub mean: f64,
}

impl WorkflowResult {
    pub fn summary(&self) -> String {
        let step = match self.samples.step() {
            Some(step) => format!("{step:.6}s"),
            None => "n/a".into(),
        };
        format!(
            "{} samples, step {}, peak {:.4}, rms {:.4}, mean {:.4}",
            self.samples.len(),
            step,
            self.peak,
            self.rms,
            self.mean
        )
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> WorkflowResult {
        let waveform = self.config.build_waveform();
        info!(
            "sampling {} wave {:?} for {}s at {} samples/s",
            self.config.kind, self.config.waveform, self.config.duration, self.config.sample_rate
        );
        let samples =
            self.config
                .sampler()
                .sample(&waveform, self.config.duration, self.config.sample_rate);

        let amplitudes = samples.amplitudes().to_vec();
        WorkflowResult {
            waveform,
            rms: StatsHelper::rms(&amplitudes),
            peak: StatsHelper::peak(&amplitudes),
            mean: StatsHelper::mean(&amplitudes),
            samples,
        }
    }

    /// Sends the samples to the configured sink. Plotting blocks until the window closes.
    pub fn publish(&self, result: &WorkflowResult) -> anyhow::Result<()> {
        match self.config.sink {
            Sink::Csv => {
                csv::save(&self.config.output, &result.samples)?;
                println!("Data saved to {}", self.config.output.display());
            }
            Sink::Plot => {
                info!("displaying {} samples", result.samples.len());
                waveview::show(self.config.title.clone(), &result.samples)
                    .map_err(|err| anyhow!("plot window failed: {err}"))?;
            }
        }
        Ok(())
    }
}
