use anyhow::Context;
use clap::Parser;
use prompt::Prompter;
use std::io;
use std::path::PathBuf;
use wavecore::prelude::{Spacing, WaveShape, WaveformConfig};
use workflow::config::{Sink, WorkflowConfig, DEFAULT_OUTPUT};
use workflow::runner::Runner;

mod export;
mod prompt;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Sample sine and square waves into a CSV file or a plot")]
struct Args {
    /// Load the whole run from a YAML file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Waveform kind (sine or square); prompts interactively when omitted
    #[arg(long)]
    kind: Option<WaveShape>,
    #[arg(long, default_value_t = 1.0)]
    frequency: f64,
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,
    /// Phase offset in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phase: f64,
    /// Seconds of signal to sample
    #[arg(long, default_value_t = 1.0)]
    duration: f64,
    #[arg(long, default_value_t = 1000.0)]
    sample_rate: f64,
    /// Time grid convention: inclusive or half-open
    #[arg(long, default_value_t = Spacing::Inclusive)]
    spacing: Spacing,
    /// CSV destination
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Show a plot window instead of writing CSV
    #[arg(long, default_value_t = false)]
    plot: bool,
    /// Ask for every parameter on stdin
    #[arg(long, default_value_t = false)]
    interactive: bool,
}

impl Args {
    fn to_workflow_config(&self, kind: WaveShape) -> WorkflowConfig {
        WorkflowConfig {
            spacing: self.spacing,
            sink: if self.plot { Sink::Plot } else { Sink::Csv },
            output: self.output.clone(),
            title: kind.label().to_string(),
            ..WorkflowConfig::from_args(
                kind,
                WaveformConfig::new(self.frequency, self.amplitude, self.phase),
                self.duration,
                self.sample_rate,
            )
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.config.as_ref() {
        WorkflowConfig::load(path)?
    } else {
        match args.kind {
            Some(kind) if !args.interactive => args.to_workflow_config(kind),
            _ => {
                let stdin = io::stdin();
                let mut prompter = Prompter::new(stdin.lock(), io::stdout());
                match prompter.run().context("reading interactive configuration")? {
                    Some(config) => config,
                    None => return Ok(()),
                }
            }
        }
    };

    let runner = Runner::new(workflow_config);
    let result = runner.execute();
    println!(
        "Generated {} wave -> {}",
        result.waveform.shape(),
        result.summary()
    );

    runner.publish(&result)?;
    Ok(())
}
