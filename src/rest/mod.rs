pub mod endpoints;

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SanctumError};

const USER_AGENT_VALUE: &str = concat!("sanctum-trade/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Which of the two API hosts an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// The main trade API (prices, quotes, liquidity).
    Primary,
    /// The extra stats API (APY, SOL value, TVL, Infinity).
    Extra,
}

/// HTTP client wrapper for the Sanctum Trade API.
///
/// Holds one `reqwest` session with the authentication header installed at
/// construction; immutable afterwards.
#[derive(Debug, Clone)]
pub struct SanctumHttpClient {
    client: Client,
    api_url: String,
    extra_api_url: String,
    verbose: bool,
}

impl SanctumHttpClient {
    pub fn new(
        api_key: &str,
        api_url: &str,
        extra_api_url: &str,
        verbose: bool,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            HeaderName::from_static("x-api-key"),
            HeaderValue::from_str(api_key)
                .map_err(|e| SanctumError::Validation(format!("invalid API key: {e}")))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            extra_api_url: extra_api_url.trim_end_matches('/').to_string(),
            verbose,
        })
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(
        &self,
        host: Host,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url(host), path);
        let resp = self.client.get(&url).query(query).send().await?;
        let value = self.decode_body(resp).await?;
        serde_json::from_value(value).map_err(SanctumError::Json)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        host: Host,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url(host), path);
        let resp = self.client.post(&url).json(body).send().await?;
        let value = self.decode_body(resp).await?;
        serde_json::from_value(value).map_err(SanctumError::Json)
    }

    /// Get the base URL for a host.
    pub fn base_url(&self, host: Host) -> &str {
        match host {
            Host::Primary => &self.api_url,
            Host::Extra => &self.extra_api_url,
        }
    }

    /// Read the body and parse it as a JSON value.
    ///
    /// A body that is not JSON at all maps to `WrongApiKey` when paired with
    /// a 403 status and `NoJson` otherwise; a later typed-decode mismatch is
    /// the caller's `serde_json::Error`. The status is not otherwise
    /// inspected, so an error status with a JSON body decodes normally.
    async fn decode_body(&self, resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        let body = resp.text().await?;
        if self.verbose {
            debug!(%status, body = %body, "raw API response");
        }
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) if status == StatusCode::FORBIDDEN => Err(SanctumError::WrongApiKey),
            Err(_) => Err(SanctumError::NoJson(body)),
        }
    }
}

/// Fail with the remote-reported errors if the `errs` object is non-empty.
pub(crate) fn check_errs(errs: &HashMap<String, Value>) -> Result<()> {
    if errs.is_empty() {
        return Ok(());
    }
    let errs = errs
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect::<serde_json::Map<_, _>>();
    Err(SanctumError::Api(Value::Object(errs)))
}
