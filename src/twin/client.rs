//! Management API client
//!
//! reqwest-backed `TwinApi` for the digital-twin management REST API.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use super::api::{ApiResult, TwinApi};
use super::types::{Space, SpaceCreate};
use crate::config::TwinConfig;
use crate::error::{ProvisionError, TwinApiError};

const SPACES_PATH: &str = "spaces";
const ERROR_BODY_LIMIT: usize = 200;

pub struct HttpTwinClient {
    http: Client,
    base_url: Url,
}

impl HttpTwinClient {
    pub fn new(config: &TwinConfig) -> Result<Self, ProvisionError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                ProvisionError::Config {
                    message: "access token contains characters not allowed in a header"
                        .to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ProvisionError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn spaces_url(&self) -> ApiResult<Url> {
        Ok(self.base_url.join(SPACES_PATH)?)
    }

    /// `spaces?$filter=...` with the `$filter` key left unescaped
    fn spaces_query_url(&self, filter: &str) -> ApiResult<Url> {
        let mut url = self.spaces_url()?;
        url.set_query(Some(&format!("$filter={}", encode_query_value(filter))));
        Ok(url)
    }
}

/// Percent-encode a query value; spaces become `%20`, never `+`
fn encode_query_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Turn a non-success response into `TwinApiError::Status`
async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TwinApiError::Status {
        status: status.as_u16(),
        body: body.chars().take(ERROR_BODY_LIMIT).collect(),
    })
}

#[async_trait]
impl TwinApi for HttpTwinClient {
    async fn query_spaces(&self, filter: &str) -> ApiResult<Vec<Space>> {
        let url = self.spaces_query_url(filter)?;
        debug!(%url, filter, "Querying spaces");

        let response = self.http.get(url).send().await?;

        let text = ensure_success(response).await?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn post_space(&self, request: &SpaceCreate) -> ApiResult<String> {
        let url = self.spaces_url()?;

        let response = self.http.post(url).json(request).send().await?;

        Ok(ensure_success(response).await?.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_url_under_base_path() {
        let config = TwinConfig::new("https://twin.example.net/management/api/v1.0").unwrap();
        let client = HttpTwinClient::new(&config).unwrap();
        assert_eq!(
            client.spaces_url().unwrap().as_str(),
            "https://twin.example.net/management/api/v1.0/spaces"
        );
    }

    #[test]
    fn test_filter_query_keeps_dollar_key() {
        let config = TwinConfig::new("https://twin.example.net/management/api/v1.0").unwrap();
        let client = HttpTwinClient::new(&config).unwrap();
        let url = client
            .spaces_query_url("Name eq 'Joe''s & Co' and ParentSpaceId eq null")
            .unwrap();
        assert_eq!(
            url.query(),
            Some("$filter=Name%20eq%20%27Joe%27%27s%20%26%20Co%27%20and%20ParentSpaceId%20eq%20null")
        );
    }

    #[test]
    fn test_encode_query_value_utf8() {
        assert_eq!(encode_query_value("Café"), "Caf%C3%A9");
        assert_eq!(encode_query_value("a+b#c"), "a%2Bb%23c");
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let config = TwinConfig::new("http://localhost:1")
            .unwrap()
            .with_access_token("abc\ndef");
        assert!(matches!(
            HttpTwinClient::new(&config),
            Err(ProvisionError::Config { .. })
        ));
    }
}
