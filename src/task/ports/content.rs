//! Content store ports for task descriptions.

use crate::task::domain::{ContentEntry, ContentPath};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Resolves content references to description text.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetches the document behind `path` and returns its optional
    /// `description` field.
    ///
    /// Returns `Ok(None)` when the document exists but carries no
    /// description.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the document cannot be fetched or is
    /// not JSON.
    async fn fetch_description(&self, path: &ContentPath) -> ContentResult<Option<String>>;
}

/// Accepts named content entries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Uploads `entry` and returns the path the store assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] when the store rejects the upload or its
    /// response carries no path.
    async fn upload(&self, entry: &ContentEntry) -> ContentResult<ContentPath>;
}

/// Errors returned by content adapters.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The endpoint answered with a non-success status.
    #[error("content endpoint rejected the request with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// The upload response did not include a content path.
    #[error("content store response did not include a path")]
    MissingPath,

    /// The response body could not be decoded.
    #[error("could not decode content response: {0}")]
    Decode(String),

    /// Transport-layer failure.
    #[error("content transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContentError {
    /// Wraps a transport-layer failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
