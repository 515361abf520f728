//! In-memory content store for task list tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{ContentEntry, ContentPath},
    ports::{ContentError, ContentFetcher, ContentResult, ContentStore},
};

/// Base every uploaded entry is placed under.
const MEMORY_ROOT: &str = "memory://content";

/// Thread-safe in-memory content store and fetcher.
///
/// Paths are compared without a trailing slash, so `ref/1` and `ref/1/`
/// address the same document.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    state: Arc<RwLock<InMemoryContentState>>,
}

#[derive(Debug, Default)]
struct InMemoryContentState {
    documents: HashMap<String, Value>,
    failing_paths: HashSet<String>,
    reject_uploads: bool,
    fetch_count: usize,
}

fn normalize(path: &str) -> String {
    path.trim().trim_end_matches('/').to_owned()
}

fn lock_error(message: String) -> ContentError {
    ContentError::transport(std::io::Error::other(message))
}

impl InMemoryContentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw JSON document at `path`, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn insert_document(&self, path: &str, document: Value) -> ContentResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| lock_error(err.to_string()))?;
        state.documents.insert(normalize(path), document);
        Ok(())
    }

    /// Makes fetches of `path` fail with a server error.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_path(&self, path: &str) -> ContentResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| lock_error(err.to_string()))?;
        state.failing_paths.insert(normalize(path));
        Ok(())
    }

    /// Makes later uploads fail.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn reject_uploads(&self, reject: bool) -> ContentResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| lock_error(err.to_string()))?;
        state.reject_uploads = reject;
        Ok(())
    }

    /// Returns the document stored at `path`, if any.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn document(&self, path: &str) -> ContentResult<Option<Value>> {
        let state = self
            .state
            .read()
            .map_err(|err| lock_error(err.to_string()))?;
        Ok(state.documents.get(&normalize(path)).cloned())
    }

    /// Returns how many fetches have been served or refused.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fetch_count(&self) -> ContentResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| lock_error(err.to_string()))?;
        Ok(state.fetch_count)
    }
}

#[async_trait]
impl ContentFetcher for InMemoryContentStore {
    async fn fetch_description(&self, path: &ContentPath) -> ContentResult<Option<String>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| lock_error(err.to_string()))?;
        state.fetch_count += 1;

        let key = normalize(path.as_str());
        if state.failing_paths.contains(&key) {
            return Err(ContentError::Rejected {
                status: 500,
                message: format!("content at {key} is unavailable"),
            });
        }
        let document = state
            .documents
            .get(&key)
            .ok_or_else(|| ContentError::Rejected {
                status: 404,
                message: format!("no content at {key}"),
            })?;
        Ok(document
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_owned))
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn upload(&self, entry: &ContentEntry) -> ContentResult<ContentPath> {
        let mut state = self
            .state
            .write()
            .map_err(|err| lock_error(err.to_string()))?;
        if state.reject_uploads {
            return Err(ContentError::Rejected {
                status: 401,
                message: "upload rejected".to_owned(),
            });
        }
        let path = format!("{MEMORY_ROOT}/{}", entry.path());
        let document = serde_json::to_value(entry.content())
            .map_err(|err| ContentError::Decode(err.to_string()))?;
        state.documents.insert(path.clone(), document);
        Ok(ContentPath::new(path))
    }
}
