use crate::domain::ports::Storage;
use crate::utils::error::{QuinielaError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct GistFileUpdate<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct GistUpdate<'a> {
    files: HashMap<&'a str, GistFileUpdate<'a>>,
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    html_url: Option<String>,
}

/// Overwrites one file of an existing Gist through the GitHub REST API.
#[derive(Clone)]
pub struct GistStorage {
    client: Client,
    api_url: String,
    gist_id: String,
    token: String,
}

impl GistStorage {
    pub fn new(api_base: &str, gist_id: &str, token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: format!("{}/gists/{}", api_base.trim_end_matches('/'), gist_id),
            gist_id: gist_id.to_string(),
            token: token.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl std::fmt::Debug for GistStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistStorage")
            .field("api_url", &self.api_url)
            .field("gist_id", &self.gist_id)
            .field("token", &"***")
            .finish()
    }
}

impl Storage for GistStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let content = std::str::from_utf8(data).map_err(|e| QuinielaError::InvalidFieldError {
            field: path.to_string(),
            reason: format!("Gist content must be UTF-8: {}", e),
        })?;

        let body = GistUpdate {
            files: HashMap::from([(path, GistFileUpdate { content })]),
        };

        tracing::info!(
            "📝 Updating Gist {} (file: {}, {} bytes)",
            self.gist_id,
            path,
            data.len()
        );

        let response = self
            .client
            .patch(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Gist API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(QuinielaError::PublishError {
                status: status.as_u16(),
                message,
            });
        }

        let location = response
            .json::<GistResponse>()
            .await
            .ok()
            .and_then(|r| r.html_url)
            .unwrap_or_else(|| self.api_url.clone());

        tracing::info!("✅ Gist updated: {}", location);
        Ok(location)
    }
}
