use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::api::{
    AddStringRequest, AlgorithmsResponse, HashesResponse, HuntRequest, HuntResponse,
    StringInfoResponse,
};

pub const DEFAULT_ENDPOINT: &str = "https://hashdb.openanalysis.net";
pub const DEFAULT_USER_AGENT: &str = concat!("hashdb/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid endpoint URL: {url}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to reach {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client")]
    Build(#[source] reqwest::Error),
}

/// Connection settings resolved from flags, env, and the config file.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

/// Outcome of one dispatched request. The raw body is kept for `--verbose`;
/// the typed body decodes defensively (missing keys become empty values).
pub struct ApiResponse<T> {
    pub status: reqwest::StatusCode,
    pub raw: Value,
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// One blocking HTTP session against the service, reused across calls for
/// its connection pool and default headers only.
pub struct HashDbClient {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl HashDbClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|source| ClientError::InvalidEndpoint {
                url: config.base_url.clone(),
                source,
            })?;

        let mut builder = reqwest::blocking::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self { http, base_url })
    }

    /// List all hash algorithms known to the service.
    pub fn algorithms(&self) -> Result<ApiResponse<AlgorithmsResponse>, ClientError> {
        self.get(self.url_with(&["hash"]), None)
    }

    /// Fetch original strings for one hash under a known algorithm.
    pub fn get_strings(
        &self,
        algorithm: &str,
        hash: u128,
    ) -> Result<ApiResponse<HashesResponse>, ClientError> {
        self.get(
            self.url_with(&["hash", algorithm, &hash.to_string()]),
            Some("probably algorithm or hash missing"),
        )
    }

    /// Reverse lookup: which algorithms could have produced these hashes.
    pub fn hunt(&self, hashes: &[u128]) -> Result<ApiResponse<HuntResponse>, ClientError> {
        self.post(
            self.url_with(&["hunt"]),
            &HuntRequest {
                hashes: hashes.to_vec(),
            },
            Some("probably algorithm or hash missing"),
        )
    }

    /// Submit a new string for hashing and indexing.
    pub fn add_string(&self, text: &str) -> Result<ApiResponse<HashesResponse>, ClientError> {
        self.post(
            self.url_with(&["string"]),
            &AddStringRequest { string: text },
            None,
        )
    }

    /// Fetch stored metadata for a known string.
    pub fn string_info(&self, text: &str) -> Result<ApiResponse<StringInfoResponse>, ClientError> {
        self.get(
            self.url_with(&["string", text]),
            Some("probably string missing"),
        )
    }

    // Segments are pushed, not formatted, so user text containing `/` or
    // `%` is percent-encoded instead of rerouting the request.
    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    fn get<T>(&self, url: Url, hint: Option<&str>) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self
            .http
            .get(url.clone())
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::read(url, response, hint)
    }

    fn post<T, B>(&self, url: Url, body: &B, hint: Option<&str>) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned + Default,
        B: Serialize,
    {
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .map_err(|source| ClientError::Transport {
                url: url.to_string(),
                source,
            })?;
        Self::read(url, response, hint)
    }

    // Non-2xx is a stderr warning, not a failure: the body is still parsed
    // and used best-effort. A body that is not JSON at all decodes to Null
    // and an empty typed value.
    fn read<T>(
        url: Url,
        response: reqwest::blocking::Response,
        hint: Option<&str>,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let status = response.status();
        if !status.is_success() {
            match hint {
                Some(hint) => crate::status!(
                    "Response code was not 200 ({}) - {}.",
                    status.as_u16(),
                    hint
                ),
                None => crate::status!("Response code was not 200 ({}).", status.as_u16()),
            }
        }

        let text = response.text().map_err(|source| ClientError::Transport {
            url: url.to_string(),
            source,
        })?;
        let raw: Value = serde_json::from_str(&text).unwrap_or(Value::Null);
        let body: T = serde_json::from_value(raw.clone()).unwrap_or_default();

        Ok(ApiResponse { status, raw, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_client(base_url: &str) -> HashDbClient {
        HashDbClient::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_segments_appended() {
        let client = local_client("http://localhost:8080");
        let url = client.url_with(&["hash", "crc32", "3177428884"]);
        assert_eq!(url.as_str(), "http://localhost:8080/hash/crc32/3177428884");
    }

    #[test]
    fn test_trailing_slash_base_no_double_slash() {
        let client = local_client("http://localhost:8080/");
        let url = client.url_with(&["hash"]);
        assert_eq!(url.as_str(), "http://localhost:8080/hash");
    }

    #[test]
    fn test_segment_with_slash_stays_one_segment() {
        let client = local_client("http://localhost:8080");
        let url = client.url_with(&["string", "a/b"]);
        assert_eq!(url.as_str(), "http://localhost:8080/string/a%2Fb");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = HashDbClient::new(ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        });

        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Invalid endpoint URL"));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_ENDPOINT);
        assert!(config.user_agent.starts_with("hashdb/"));
        assert!(config.timeout.is_none());
    }
}
