use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaveError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("invalid wave config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse wave config: {0}")]
    ConfigParse(String),

    #[error("frame time is not finite: {0}")]
    NonFiniteTime(f64),

    #[error("surface error: {0}")]
    Surface(String),

    #[error("scheduler error: {0}")]
    Scheduler(String),

    #[error("invalid counter target '{0}'")]
    InvalidCounterTarget(String),

    /// A browser API call failed; carries the debug form of the thrown value.
    #[error("browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for WaveError {
    fn from(err: serde_json::Error) -> Self {
        WaveError::ConfigParse(err.to_string())
    }
}
