use anyhow::Result;
use reqwest::Client;
use url::Url;

use crate::config::Config;

/// Status and body exactly as the endpoint returned them.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
pub struct EmotionService {
    client: Client,
    base_url: Url,
}

impl EmotionService {
    pub fn new(config: &Config) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: config.base_url.clone(),
        }
    }

    /// Resolves a relative request path the way a page resolves a relative URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// One GET, no retries. Non-2xx statuses are returned, not raised.
    pub async fn fetch(&self, path: &str) -> Result<RawResponse> {
        let url = self.endpoint(path)?;
        // The URL carries the user's text; keep it out of error messages
        let response = self.client.get(url).send().await.map_err(|e| e.without_url())?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.without_url())?;
        Ok(RawResponse { status, body })
    }
}
