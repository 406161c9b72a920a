//! Blocking plot window for a [`SampleSet`](wavecore::SampleSet).

mod app;
pub mod axes;
mod chart;

pub use app::show;
pub use axes::{nice_ticks, PlotBounds};
