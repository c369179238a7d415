use thiserror::Error;

/// Rejected command-line configuration.
///
/// Each variant corresponds to one validation rule and carries a stable
/// process exit code so scripts can branch on the failure kind. Codes 0-2
/// are reserved for success, recognized runtime errors, and contained
/// panics respectively.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested value count is zero or negative.
    #[error("number of values must be at least 1, got {0}")]
    CountNotPositive(i64),
    /// More than one rounding mode was requested.
    #[error("rounding modes are mutually exclusive: {0}")]
    RoundingConflict(String),
    /// Requested precision exceeds what the value type can render.
    #[error("precision {got} exceeds the maximum of {max} digits")]
    PrecisionTooHigh { got: i64, max: u32 },
    /// Requested precision is negative.
    #[error("precision must not be negative, got {0}")]
    PrecisionNegative(i64),
    /// `--exclude` was given without any values.
    #[error("exclude requires at least one value")]
    ExcludeEmpty,
    /// Lower bound is above the upper bound.
    #[error("lower bound {lbound} is above upper bound {ubound}")]
    BoundsInverted { lbound: f64, ubound: f64 },
    /// A prefix/suffix/contains entry is not a numeric fragment.
    #[error("filter entry {0:?} is not numeric (digits and at most one '.')")]
    FilterNotNumeric(String),
    /// The requested generator name is not in the catalog.
    #[error("unknown generator {0:?}")]
    UnknownEngine(String),
}

impl ConfigError {
    /// Stable exit code for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::CountNotPositive(_) => 3,
            ConfigError::RoundingConflict(_) => 4,
            ConfigError::PrecisionTooHigh { .. } => 5,
            ConfigError::PrecisionNegative(_) => 6,
            ConfigError::ExcludeEmpty => 7,
            ConfigError::BoundsInverted { .. } => 8,
            ConfigError::FilterNotNumeric(_) => 9,
            ConfigError::UnknownEngine(_) => 10,
        }
    }
}

/// Convenience alias for config resolution results.
pub type Result<T> = std::result::Result<T, ConfigError>;
