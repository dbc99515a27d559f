use thiserror::Error;

/// Errors from attaching to a scroll source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    #[error("scroll source unavailable: {0}")]
    SourceUnavailable(String),
}
