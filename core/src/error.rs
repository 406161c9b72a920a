/// Errors raised while selecting a waveform. Generation itself is total.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WaveError {
    #[error("unknown waveform shape: {0}")]
    UnknownShape(String),
    #[error("unknown grid spacing: {0}")]
    UnknownSpacing(String),
}

pub type WaveResult<T> = Result<T, WaveError>;
