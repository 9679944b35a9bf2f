use thiserror::Error;

pub type ScaleResult<T> = Result<T, ScaleError>;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("invalid tick count: {tick_count} (at least 2 required)")]
    InvalidTickCount { tick_count: usize },

    #[error("invalid axis size: {size} (must be finite and >= 1)")]
    InvalidAxisSize { size: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
