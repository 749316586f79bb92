use thiserror::Error;

/// Error surfaced by a host capability (URL generation, lookups). Never
/// handled inside the builders; it propagates to the host pipeline.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

impl From<String> for HostError {
    fn from(s: String) -> Self {
        HostError::Generic(s)
    }
}

impl From<&str> for HostError {
    fn from(s: &str) -> Self {
        HostError::Generic(s.to_string())
    }
}
