use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};

use crate::error::{CrawlError, Result};

/// Where listings and images come from.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

/// Plain `reqwest` client sending the crawler's User-Agent on every request.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_builder(Client::builder(), user_agent)
    }

    fn with_builder(builder: ClientBuilder, user_agent: &str) -> Result<Self> {
        let client = builder
            .user_agent(user_agent)
            .build()
            .map_err(|source| CrawlError::Client { source })?;
        Ok(HttpTransport { client })
    }

    async fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| network(url, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.send(url)
            .await?
            .text()
            .await
            .map_err(|source| network(url, source))
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let content = self
            .send(url)
            .await?
            .bytes()
            .await
            .map_err(|source| network(url, source))?;
        Ok(content.to_vec())
    }
}

fn network(url: &str, source: reqwest::Error) -> CrawlError {
    CrawlError::Network {
        url: url.to_owned(),
        source,
    }
}
