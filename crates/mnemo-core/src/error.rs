//! Error types shared by the scheduler, the decay curves and the session driver.

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors raised when callers hand the engine malformed input
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MnemoError {
    /// Grade outside the 0-5 review scale
    #[error("Invalid grade: {0} (expected an integer from 0 to 5)")]
    InvalidGrade(i64),
    /// Grade name that matches no point on the scale
    #[error("Unknown grade name: {0}")]
    InvalidGradeName(String),
    /// Numeric argument outside its domain
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Name of the offending argument
        name: &'static str,
        /// Value that was rejected
        value: f64,
    },
    /// Inconsistent configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MnemoError {
    pub(crate) fn parameter(name: &'static str, value: f64) -> Self {
        MnemoError::InvalidParameter { name, value }
    }
}

/// Mnemo result type
pub type Result<T> = std::result::Result<T, MnemoError>;
