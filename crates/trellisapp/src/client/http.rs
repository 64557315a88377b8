use std::time::Duration;

use log::debug;
use reqwest::blocking::{RequestBuilder, Response};
use serde_json::Value;

use super::Client;
use crate::config::TrellisConfig;
use crate::error::{Result, TrellisError};

const USER_AGENT: &str = concat!("trellis/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the Trello REST API.
///
/// Authenticates every request with the developer key and member token,
/// sent as `key` and `token` query parameters.
pub struct HttpClient {
    base_url: String,
    developer_key: String,
    member_token: String,
    http: reqwest::blocking::Client,
}

impl HttpClient {
    /// # Errors
    ///
    /// Returns a configuration error when any credential or the base URL is
    /// empty, and a transport error when the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        developer_key: impl Into<String>,
        member_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let developer_key = developer_key.into();
        let member_token = member_token.into();

        for (field, value) in [
            ("api_base_url", &base_url),
            ("developer_key", &developer_key),
            ("member_token", &member_token),
        ] {
            if value.trim().is_empty() {
                return Err(TrellisError::configuration(format!(
                    "{field} must not be empty"
                )));
            }
        }

        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TrellisError::transport(None, e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            developer_key,
            member_token,
            http,
        })
    }

    /// Build a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when credentials are missing.
    pub fn from_config(config: &TrellisConfig) -> Result<Self> {
        let (key, token) = config.credentials()?;
        Self::new(
            config.api_base_url.clone(),
            key,
            token,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        request.query(&[
            ("key", self.developer_key.as_str()),
            ("token", self.member_token.as_str()),
        ])
    }

    fn send(request: RequestBuilder) -> Result<Value> {
        let response = request
            .send()
            .map_err(|e| TrellisError::transport(None, e.to_string()))?;
        Self::decode(response)
    }

    fn decode(response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .ok()
                .filter(|body| !body.trim().is_empty())
                .unwrap_or_else(|| status.to_string());
            return Err(TrellisError::transport(Some(status.as_u16()), message));
        }

        response
            .json::<Value>()
            .map_err(|e| TrellisError::transport(Some(status.as_u16()), e.to_string()))
    }
}

impl Client for HttpClient {
    fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        debug!("event=request method=GET path={path} query={query:?}");
        let request = self.authenticated(self.http.get(self.url(path))).query(query);
        Self::send(request)
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value> {
        debug!("event=request method=PUT path={path}");
        let request = self.authenticated(self.http.put(self.url(path))).json(body);
        Self::send(request)
    }
}
