use thiserror::Error;

/// The main error type for monitor operations.
///
/// Fetch-stage variants carry the failure message only, so the error can be
/// recorded on the shared monitor state and simultaneously returned to the
/// caller. The variant tells the serve layer which fetch stage failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    /// TCP dial to the appliance status port failed or timed out.
    #[error("connection error: {0}")]
    Connection(String),

    /// Reading the status stream failed for a reason other than the
    /// expected end-of-message deadline.
    #[error("read error: {0}")]
    Read(String),

    /// The received bytes did not contain an XML payload, or violated a
    /// protocol bound.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// An XML payload was found but is not a well-formed status document.
    #[error("malformed status document: {0}")]
    Parse(String),

    /// Monitor construction was given invalid input. Never produced by a
    /// fetch attempt.
    #[error("validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },
}

/// Specialized error type for builder input validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A validation failure for a specific field.
    #[error("field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Format/syntax validation failures.
    #[error("format error: {0}")]
    Format(String),

    /// Violations of domain constraints.
    #[error("domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a MonitorError
pub type MonitorResult<T> = Result<T, MonitorError>;
