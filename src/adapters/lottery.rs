use crate::domain::model::{first_record, is_present, DrawDate, MatchBundle, DATE_FIELD};
use crate::utils::error::{QuinielaError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

const SITE_ORIGIN: &str = "https://juegos.loteriasyapuestas.es";
const SITE_REFERER: &str = "https://juegos.loteriasyapuestas.es/";
const BROWSER_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_SEC_CH_UA: &str =
    r#""Chromium";v="140", "Not=A?Brand";v="24", "Google Chrome";v="140""#;

/// The lottery endpoints reject requests that don't look like they come
/// from the game site itself.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, HeaderValue::from_static(SITE_REFERER));
    headers.insert(ORIGIN, HeaderValue::from_static(SITE_ORIGIN));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert("priority", HeaderValue::from_static("u=1, i"));
    headers.insert("sec-ch-ua", HeaderValue::from_static(BROWSER_SEC_CH_UA));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
    headers
}

#[derive(Debug, Clone)]
pub struct LotteryClient {
    client: Client,
}

impl LotteryClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        tracing::info!("🌐 Requesting {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(QuinielaError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn next_draw_date(&self, url: &str) -> Result<DrawDate> {
        let data = self.get_json(url).await?;

        let raw = first_record(data)
            .and_then(|record| {
                let value = record.get(DATE_FIELD);
                if is_present(value) {
                    value.and_then(|v| v.as_str()).map(str::to_string)
                } else {
                    None
                }
            })
            .ok_or_else(|| QuinielaError::missing_field(DATE_FIELD, url))?;

        let date = DrawDate::from_api_field(&raw)?;
        tracing::info!("📅 Next draw date: {}", date);
        Ok(date)
    }

    /// `base_url` already ends with the date query parameter name.
    pub async fn matches_for(&self, base_url: &str, date: &DrawDate) -> Result<MatchBundle> {
        let url = format!("{}{}", base_url, date);
        let data = self.get_json(&url).await?;
        let bundle = MatchBundle::from_response(data, &url)?;

        tracing::info!(
            "⚽ Fetched {} matches for draw {}",
            bundle.match_count(),
            bundle.draw_date().unwrap_or(date.as_str())
        );
        Ok(bundle)
    }
}
