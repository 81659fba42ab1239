//! Store Errors

/// Common result type for persistence operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-level errors
///
/// None of these reach the UI; the store logs them and degrades to
/// "no data" or "not saved".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No durable storage (no window, or storage disabled)
    Unavailable(String),
    Read(String),
    Write(String),
    /// Snapshot present but not a list of items
    Malformed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StoreError::Read(msg) => write!(f, "Read failed: {}", msg),
            StoreError::Write(msg) => write!(f, "Write failed: {}", msg),
            StoreError::Malformed(msg) => write!(f, "Malformed snapshot: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Malformed(e.to_string())
    }
}
