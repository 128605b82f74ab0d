use thiserror::Error;

/// Failures reported by the remote data layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// A read query failed.
    #[error("Query failed: {message}")]
    Query { message: String },

    /// A save was refused; nothing was written.
    #[error("Save rejected: {message}")]
    Rejected { message: String },

    /// The referenced record does not exist.
    #[error("Record '{id}' not found")]
    NotFound { id: String },

    /// The data layer could not be reached.
    #[error("Data layer unavailable: {0}")]
    Unavailable(String),
}

impl GatewayError {
    pub fn query(message: impl Into<String>) -> Self {
        GatewayError::Query {
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            message: message.into(),
        }
    }
}
