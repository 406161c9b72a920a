pub mod sample_set;
pub mod sampler;

pub use sample_set::SampleSet;
pub use sampler::{sample, Sampler, Spacing};
