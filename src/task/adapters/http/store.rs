//! Content store backed by a Moralis-style IPFS folder upload endpoint.

use crate::task::{
    domain::{ContentEntry, ContentPath},
    ports::{ContentError, ContentResult, ContentStore},
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Header carrying the content store API key.
const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Deserialize)]
struct UploadedEntry {
    path: String,
}

/// Uploads entries with `POST <base>/ipfs/uploadFolder`.
///
/// The request body is a JSON array holding the single entry; the response
/// is an array of `{ "path": ... }` objects and the first path is kept.
pub struct MoralisContentStore {
    client: reqwest::Client,
    upload_url: String,
    api_key: String,
}

impl MoralisContentStore {
    /// Creates a store for the API rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: format!("{}/ipfs/uploadFolder", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    /// Returns the upload endpoint.
    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

fn first_path(body: &str) -> ContentResult<ContentPath> {
    let entries: Vec<UploadedEntry> =
        serde_json::from_str(body).map_err(|err| ContentError::Decode(err.to_string()))?;
    let path = entries
        .into_iter()
        .next()
        .map(|entry| entry.path.trim().to_owned())
        .ok_or(ContentError::MissingPath)?;
    if path.is_empty() {
        return Err(ContentError::MissingPath);
    }
    Ok(ContentPath::new(path))
}

#[async_trait]
impl ContentStore for MoralisContentStore {
    async fn upload(&self, entry: &ContentEntry) -> ContentResult<ContentPath> {
        debug!(entry = entry.path(), url = %self.upload_url, "uploading content entry");
        let response = self
            .client
            .post(&self.upload_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&[entry])
            .send()
            .await
            .map_err(ContentError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ContentError::transport)?;
        if !status.is_success() {
            return Err(ContentError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }
        first_path(&body)
    }
}
