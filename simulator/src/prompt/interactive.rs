use crate::workflow::config::{Sink, WorkflowConfig, DEFAULT_DURATION, DEFAULT_SAMPLE_RATE};
use anyhow::Context;
use log::warn;
use std::io::{BufRead, Write};
use std::str::FromStr;
use wavecore::prelude::{WaveShape, WaveformConfig};

/// Question-and-answer front end that assembles a [`WorkflowConfig`].
///
/// Blank answers take the default where one exists. Text that does not parse
/// as a number is an error for the caller; an unknown waveform choice is
/// reported and yields `None`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> anyhow::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("reading prompt input")?;
        Ok(line.trim().to_string())
    }

    fn ask_number<T>(
        &mut self,
        question: &str,
        label: &str,
        default: Option<T>,
    ) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let answer = self.ask(question)?;
        match default {
            Some(value) if answer.is_empty() => Ok(value),
            _ => answer
                .parse()
                .with_context(|| format!("parsing {label} from {answer:?}")),
        }
    }

    pub fn run(&mut self) -> anyhow::Result<Option<WorkflowConfig>> {
        writeln!(self.output, "Select waveform type:")?;
        for shape in WaveShape::ALL {
            writeln!(self.output, "{}: {}", shape.choice(), shape.label())?;
        }
        let choice: i64 = self.ask_number("Enter choice (1 or 2): ", "waveform choice", None)?;

        let frequency = self.ask_number("Enter frequency (Hz): ", "frequency", None)?;
        let amplitude = self.ask_number("Enter amplitude: ", "amplitude", None)?;
        let phase = self.ask_number("Enter phase (optional, default 0): ", "phase", Some(0.0))?;

        let kind = match u8::try_from(choice)
            .ok()
            .and_then(|c| WaveShape::try_from(c).ok())
        {
            Some(kind) => kind,
            None => {
                warn!("rejected waveform choice {}", choice);
                writeln!(self.output, "Invalid choice!")?;
                return Ok(None);
            }
        };

        let duration = self.ask_number(
            "Enter duration (seconds, default 1): ",
            "duration",
            Some(DEFAULT_DURATION),
        )?;
        let sample_rate: u32 = self.ask_number(
            "Enter sample rate (samples/second, default 1000): ",
            "sample rate",
            Some(DEFAULT_SAMPLE_RATE as u32),
        )?;

        let sink = if self.ask("Save to CSV? (y/n): ")?.eq_ignore_ascii_case("y") {
            Sink::Csv
        } else {
            Sink::Plot
        };

        Ok(Some(WorkflowConfig {
            kind,
            waveform: WaveformConfig::new(frequency, amplitude, phase),
            duration,
            sample_rate: sample_rate as f64,
            sink,
            ..Default::default()
        }))
    }
}
