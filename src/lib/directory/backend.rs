use log::{debug, info};
use reqwest::{Client, Method};
use serde_json::Value;

use super::api::ApiError;

/// Status and raw body of a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// A trait, necessary for every entity that will carry requests to the directory backend.
/// `path` is relative to the API root, e.g. `professors/3/`.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn send(&self, method: Method, path: &str, body: Option<&Value>)
        -> Result<Reply, ApiError>;
}

/// Talks to the real backend over HTTP with JSON bodies.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        HttpBackend {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Backend for HttpBackend {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Reply, ApiError> {
        let request_url = self.url(path);
        info!("{} {}", method, request_url);
        let mut request = self.client.request(method, request_url);
        if let Some(body) = body {
            debug!("Sending {}", body);
            request = request.json(body);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(Reply { status, body })
    }
}
