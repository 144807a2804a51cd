/// Error types for the link list
use thiserror::Error;

/// Recoverable failures of store operations, shown to the user as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Please enter a task.")]
    EmptyInput,

    #[error("You can only add up to {max} tasks.")]
    CapacityExceeded { max: usize },

    #[error("unsupported capacity {0}; choose 3, 5 or 7")]
    InvalidCapacity(u32),
}

/// A storage read or write that did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("failed to encode {key}: {message}")]
    Encode { key: String, message: String },

    #[error("failed to read {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write {key}: {message}")]
    Write { key: String, message: String },
}

/// Why persisted state could not be used; always recovered by falling back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("malformed persisted data under {key}: {message}")]
    Malformed { key: String, message: String },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Rejection reasons from `classifier::validate_safely`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafetyError {
    #[error("invalid URL: {0}")]
    Unparseable(String),

    #[error("Invalid protocol {0}")]
    InvalidProtocol(String),

    #[error("Suspicious hostname {0}")]
    SuspiciousHostname(String),

    #[error("Hostname too long ({0} characters)")]
    HostnameTooLong(usize),
}
