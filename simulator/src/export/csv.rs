use anyhow::Context;
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use wavecore::SampleSet;

pub const HEADER: &str = "Time,Amplitude";

/// Shortest decimal that round-trips, always with a point or exponent (`1.0`, `1e-7`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

pub fn write_rows<W: Write>(mut writer: W, samples: &SampleSet) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for (time, amplitude) in samples.iter() {
        writeln!(
            writer,
            "{},{}",
            format_value(time),
            format_value(amplitude)
        )?;
    }
    writer.flush()
}

pub fn save(path: &Path, samples: &SampleSet) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("creating csv file {}", path.display()))?;
    write_rows(BufWriter::new(file), samples)
        .with_context(|| format!("writing csv file {}", path.display()))?;
    info!("wrote {} rows to {}", samples.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavecore::prelude::{sample, Sampler, SineWave, Spacing, SquareWave};

    fn render(samples: &SampleSet) -> String {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, samples).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn square_rows_include_zero_crossings() {
        let samples =
            Sampler::new(Spacing::HalfOpen).sample(&SquareWave::new(1.0, 2.0, 0.0), 1.0, 4.0);
        let text = render(&samples);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Time,Amplitude");
        assert_eq!(&lines[1..], ["0.0,0.0", "0.25,2.0", "0.5,0.0", "0.75,-2.0"]);
    }

    #[test]
    fn three_samples_give_header_and_three_rows() {
        let samples = sample(&SineWave::new(0.0, 1.0, 0.0), 1.0, 3.0);
        let text = render(&samples);
        assert_eq!(text, "Time,Amplitude\n0.0,0.0\n0.5,0.0\n1.0,0.0\n");
    }

    #[test]
    fn empty_set_writes_header_only() {
        let samples = sample(&SineWave::default(), 0.0, 1000.0);
        assert_eq!(render(&samples), "Time,Amplitude\n");
    }

    #[test]
    fn format_value_keeps_full_precision() {
        assert_eq!(format_value(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_value(-2.0), "-2.0");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        save(&path, &sample(&SineWave::default(), 1.0, 2.0)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
