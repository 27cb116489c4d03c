//! Error types for XR session plumbing.

use thiserror::Error;

/// Errors surfaced by the immersive session.
///
/// None of these are fatal to the frame loop: the tracker logs them and
/// keeps its state recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XrError {
    #[error("reference space request rejected: {0}")]
    ReferenceSpaceRejected(String),

    #[error("hit-test source request rejected: {0}")]
    HitTestSourceRejected(String),

    #[error("session has already ended")]
    SessionEnded,
}

/// Result type for XR operations.
pub type XrResult<T> = Result<T, XrError>;
