use thiserror::Error;

/// Runtime errors emitted by the roll engine.
///
/// These are the recognized runtime failures: reported once on stderr and
/// mapped to exit code 1, in contrast to configuration errors (3-10) and
/// contained panics (2).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("uniform distribution: {0}")]
    Distribution(#[from] rand::distr::uniform::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
