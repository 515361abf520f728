//! Content fetcher over plain HTTP GET.

use crate::task::{
    domain::ContentPath,
    ports::{ContentError, ContentFetcher, ContentResult},
};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DescriptionBody {
    #[serde(default)]
    description: Option<String>,
}

/// Fetches description documents from the URL held in a content path.
///
/// Entries are uploaded as folders, so the request targets the path with a
/// trailing slash (see [`ContentPath::endpoint`]).
#[derive(Debug, Clone, Default)]
pub struct HttpContentFetcher {
    client: reqwest::Client,
}

impl HttpContentFetcher {
    /// Creates a fetcher with a fresh connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fetcher sharing an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn parse_description(body: &str) -> ContentResult<Option<String>> {
    let document: DescriptionBody =
        serde_json::from_str(body).map_err(|err| ContentError::Decode(err.to_string()))?;
    Ok(document.description)
}

#[async_trait]
impl ContentFetcher for HttpContentFetcher {
    async fn fetch_description(&self, path: &ContentPath) -> ContentResult<Option<String>> {
        let response = self
            .client
            .get(path.endpoint())
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
        parse_description(&body)
    }
}
