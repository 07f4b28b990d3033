use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{Result, ZencoderError};

const DEFAULT_BASE_URL: &str = "https://app.zencoder.com/api/v2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_USER_AGENT: &str = concat!("zencoder-rs/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "zencoder-api-key";
const API_KEY_ENV: &str = "ZENCODER_API_KEY";

/// Query string pairs appended to a request path.
pub(crate) type Query = Vec<(&'static str, String)>;

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use zencoder::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> zencoder::Result<()> {
/// let client = ClientBuilder::new()
///     .api_key("93h630j1dsyshjef620qlkavnmzui3")
///     .base_url("https://app.zencoder.com/api/v2")
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    user_agent: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Set the API key sent in the `Zencoder-Api-Key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://app.zencoder.com/api/v2`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Add a header to every request, replacing any default of the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the request timeout of the default transport (defaults to 60 seconds).
    ///
    /// Ignored when a transport is supplied with [`http_client`](Self::http_client).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }

    /// Use a preconfigured `reqwest::Client` as the transport.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`Client`].
    ///
    /// If no API key was set via [`api_key`](Self::api_key), the builder
    /// reads the `ZENCODER_API_KEY` environment variable.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or(ZencoderError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            header_value(&api_key)?,
        );
        headers.insert(USER_AGENT, header_value(&self.user_agent)?);

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ZencoderError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(name, header_value(value)?);
        }

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };

        Ok(Client {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            headers,
            http,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| ZencoderError::InvalidHeader(e.to_string()))
}

/// The Zencoder API client.
///
/// Configuration is fixed once built; a `Client` is cheap to clone and can
/// serve concurrent calls. Each call makes exactly one HTTP attempt.
///
/// # Example
///
/// ```no_run
/// use zencoder::Client;
///
/// # async fn example() -> zencoder::Result<()> {
/// let client = Client::new("93h630j1dsyshjef620qlkavnmzui3")?;
///
/// let progress = client.get_job_progress(1234).await?;
/// println!("{:?} at {:?}%", progress.state, progress.progress);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: String,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl Client {
    /// Create a client with the given API key and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// The base URL every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Request executor
    // -----------------------------------------------------------------------

    /// Serialize `body`, POST it, require `expected` and decode the reply.
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B, expected: StatusCode) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = serde_json::to_vec(body).map_err(ZencoderError::Encode)?;
        let response = self.send(Method::POST, path, Query::new(), Some(bytes)).await?;
        let response = expect_status(response, expected).await?;
        decode(response).await
    }

    /// GET `path`, require 200 and decode the reply.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T> {
        let response = self.send(Method::GET, path, query, None).await?;
        let response = expect_status(response, StatusCode::OK).await?;
        decode(response).await
    }

    /// PUT `path` without a body and require 204.
    pub(crate) async fn put_no_body(&self, path: &str) -> Result<()> {
        let response = self.send(Method::PUT, path, Query::new(), None).await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%method, %url, "sending zencoder request");

        let mut req = self.http.request(method, &url).headers(self.headers.clone());
        if !query.is_empty() {
            req = req.query(&query);
        }
        if let Some(bytes) = body {
            req = req.body(bytes);
        }

        let response = req.send().await?;
        debug!(status = %response.status(), %url, "received zencoder response");
        Ok(response)
    }
}

async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    warn!(%status, %expected, url = %response.url(), "unexpected status from zencoder");
    let body = response.text().await.ok().filter(|text| !text.is_empty());
    Err(ZencoderError::UnexpectedStatus {
        expected,
        status,
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(ZencoderError::Body)?;
    serde_json::from_slice(&bytes).map_err(ZencoderError::Decode)
}
