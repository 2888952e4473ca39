use thiserror::Error;

/// Errors that can occur while configuring or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Inconsistent match result: {0}")]
    InvalidResult(String),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Errors a reporter can hit while rendering a finished simulation
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
