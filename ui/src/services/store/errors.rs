use std::fmt;

/// Failures reported by the hosted registration store.
///
/// `Display` yields the store's own message so it can be shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Request never produced a response
    Network {
        message: String,
    },
    /// Store answered with a non-success status
    Rejected {
        status: u16,
        message: String,
    },
    /// Response body could not be decoded
    Decode {
        message: String,
    },
    /// Client could not be built from the given settings
    Configuration {
        message: String,
    },
}

impl StoreError {
    pub fn message(&self) -> &str {
        match self {
            StoreError::Network { message }
            | StoreError::Rejected { message, .. }
            | StoreError::Decode { message }
            | StoreError::Configuration { message } => message,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode {
            message: err.to_string(),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
