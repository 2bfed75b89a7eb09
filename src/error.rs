//! Error types for quern.

use thiserror::Error;

/// The main error type for criteria construction and query assembly.
#[derive(Debug, Error)]
pub enum QuernError {
    /// A field name or alias was blank after trimming.
    #[error("Blank field {0}: identifiers must be non-empty after trimming")]
    BlankIdentifier(&'static str),

    /// An operator was handed a right-hand side of the wrong shape.
    #[error("Invalid value for {operator}: expected {expected}")]
    InvalidValue {
        operator: &'static str,
        expected: &'static str,
    },

    /// A BETWEEN bound was NULL.
    #[error("Missing {0} bound: BETWEEN requires both bounds")]
    NullBound(&'static str),

    /// An IN / NOT IN list had no elements.
    #[error("{0} requires at least one value")]
    EmptyList(&'static str),

    /// A query reached assembly without a FROM table.
    #[error("Cannot assemble a query without a FROM table")]
    MissingFrom,

    /// The database-capability provider failed to report its identifier quote.
    #[error("Capability error: {0}")]
    Capability(String),
}

impl QuernError {
    /// Create a blank-identifier error for the given field part.
    pub fn blank(what: &'static str) -> Self {
        Self::BlankIdentifier(what)
    }

    /// Create an invalid-value error.
    pub fn invalid_value(operator: &'static str, expected: &'static str) -> Self {
        Self::InvalidValue { operator, expected }
    }

    /// Create a capability error.
    pub fn capability(message: impl Into<String>) -> Self {
        Self::Capability(message.into())
    }
}

/// Result type alias for quern operations.
pub type QuernResult<T> = Result<T, QuernError>;
