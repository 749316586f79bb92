use crate::error::HostError;

/// Host Result type alias
pub type HostResult<T> = Result<T, HostError>;
