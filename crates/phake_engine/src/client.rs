use std::str::FromStr;
use std::time::Duration;

use futures_util::StreamExt;
use phake_core::{AnalysisPayload, AnalysisRequest};
use phake_logging::{phake_debug, phake_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::wire;
use crate::ClientError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/v1/links";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Full URL the analysis request is POSTed to.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_response_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            // Generating an explanation runs a language model server-side.
            request_timeout: Duration::from_secs(60),
            max_response_bytes: 1024 * 1024,
        }
    }
}

impl ClientSettings {
    /// Reads overrides from `PHAKE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Missing or unparsable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: lookup("PHAKE_API_URL")
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.endpoint),
            connect_timeout: parse_or(&lookup, "PHAKE_CONNECT_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            request_timeout: parse_or(&lookup, "PHAKE_REQUEST_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            max_response_bytes: parse_or(&lookup, "PHAKE_MAX_RESPONSE_BYTES")
                .unwrap_or(defaults.max_response_bytes),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            phake_warn!("Ignoring unparsable {}={:?}", key, raw);
            None
        }
    }
}

/// One outbound call to the analysis service.
#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestAnalysisClient {
    settings: ClientSettings,
}

impl ReqwestAnalysisClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ClientError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ClientError::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ClientError::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl AnalysisClient for ReqwestAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisPayload, ClientError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| ClientError::InvalidEndpoint(err.to_string()))?;
        let body =
            wire::encode_request(request).map_err(|err| ClientError::Encode(err.to_string()))?;
        let client = self.build_client()?;

        phake_debug!(
            "POST {} mode={} exclude_count={}",
            endpoint,
            request.mode,
            request.exclude.len()
        );
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is best effort; a broken one must not hide the status.
            let bytes = self.read_body(response).await.unwrap_or_default();
            let (message, code) = wire::decode_error(&bytes);
            phake_warn!(
                "Analysis service returned {} code={:?} message={:?}",
                status,
                code,
                message
            );
            return Err(ClientError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = self.read_body(response).await?;
        wire::decode_success(request, &bytes).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::Timeout(err.to_string());
    }
    ClientError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn lookup_overrides_and_falls_back() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PHAKE_API_URL", " https://phake.example/api/v1/links "),
            ("PHAKE_REQUEST_TIMEOUT_SECS", "5"),
            ("PHAKE_CONNECT_TIMEOUT_SECS", "soon"),
        ]);
        let settings = ClientSettings::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(settings.endpoint, "https://phake.example/api/v1/links");
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.max_response_bytes, 1024 * 1024);
    }

    #[test]
    fn empty_lookup_is_default_endpoint() {
        let settings = ClientSettings::from_lookup(|_| None);
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }
}
