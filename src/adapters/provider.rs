use crate::core::{ArticleId, Count, CountProvider};
use crate::utils::error::{GoodCountError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use url::Url;

/// Adapts a plain lookup function into a `CountProvider`.
pub struct FnCountProvider<F> {
    lookup: F,
}

impl<F> FnCountProvider<F>
where
    F: Fn(&str) -> Result<Count> + Send + Sync,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl<F> CountProvider for FnCountProvider<F>
where
    F: Fn(&str) -> Result<Count> + Send + Sync,
{
    async fn lookup_count(&self, article_id: &ArticleId) -> Result<Count> {
        (self.lookup)(article_id.as_str())
    }
}

/// Fixed table of counts. Unknown articles are a provider failure.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCountProvider {
    counts: HashMap<String, Count>,
}

impl InMemoryCountProvider {
    pub fn new(counts: HashMap<String, Count>) -> Self {
        Self { counts }
    }
}

impl<K: Into<String>> FromIterator<(K, Count)> for InMemoryCountProvider {
    fn from_iter<I: IntoIterator<Item = (K, Count)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[async_trait]
impl CountProvider for InMemoryCountProvider {
    async fn lookup_count(&self, article_id: &ArticleId) -> Result<Count> {
        self.counts
            .get(article_id.as_str())
            .copied()
            .ok_or_else(|| GoodCountError::provider(format!("unknown article: {}", article_id)))
    }
}

#[derive(Debug, Deserialize)]
struct CountPayload {
    count: Count,
}

/// Reads counts from a remote service at `GET {endpoint}/{article_id}`.
///
/// The service must answer 2xx with a JSON object holding a non-negative
/// integer `count`.
#[derive(Debug, Clone)]
pub struct HttpCountProvider {
    endpoint: Url,
    client: Client,
}

impl HttpCountProvider {
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| GoodCountError::InvalidConfigValueError {
            field: "count_endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        if endpoint.cannot_be_a_base() {
            return Err(GoodCountError::InvalidConfigValueError {
                field: "count_endpoint".to_string(),
                value: endpoint.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    fn url_for(&self, article_id: &ArticleId) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(article_id.as_str());
        }
        url
    }
}

#[async_trait]
impl CountProvider for HttpCountProvider {
    async fn lookup_count(&self, article_id: &ArticleId) -> Result<Count> {
        let url = self.url_for(article_id);
        tracing::debug!("Making count request to: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Count service response status: {}", status);

        if !status.is_success() {
            return Err(GoodCountError::provider(format!(
                "count service returned {} for article {}",
                status, article_id
            )));
        }

        let payload: CountPayload = response.json().await.map_err(|e| {
            GoodCountError::provider(format!("malformed count payload: {}", e))
        })?;
        Ok(payload.count)
    }
}
