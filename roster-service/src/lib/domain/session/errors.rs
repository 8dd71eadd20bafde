use thiserror::Error;

/// Error for session store operations.
///
/// Token absence and expiry are not errors; they surface as `None` from
/// lookups so callers cannot tell the two apart.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Session store failure: {0}")]
    StoreFailure(String),
}
