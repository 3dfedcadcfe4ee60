//! Authenticated request pipeline for the ritual backend.
//!
//! Every command talks to the backend through [`ApiClient`], which turns an
//! [`ApiRequest`] (method, path, query, optional JSON body) into a single HTTP
//! round trip and classifies the result.
//!
//! ## Request Lifecycle
//!
//! ```text
//! Unsent ──▶ credentials checked ──▶ Sent ──▶ Success
//!                 │                     ├──▶ Http { status, body }
//!                 ▼                     ├──▶ Transport(cause)
//!        MissingCredentials             └──▶ Decode(cause)
//! ```
//!
//! Each call is terminal in one step: no retries, no backoff, and no state is
//! carried over to the next call. A missing credential is detected before any
//! network I/O and never reaches the transport.
//!
//! ## Transport Seam
//!
//! Network I/O goes through the [`Transport`] trait. [`ReqwestTransport`] is
//! the production implementation; tests substitute an in-memory stub.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ritual::api::{ApiClient, ApiRequest};
//! use ritual::libs::config::Config;
//!
//! # async fn run() -> Result<(), ritual::api::ApiError> {
//! let config = Config::from_env().expect("valid configuration");
//! let client = ApiClient::from_config(&config)?;
//! let body = client.execute(ApiRequest::get("get-goals")).await?;
//! println!("{}", body);
//! # Ok(())
//! # }
//! ```

use crate::libs::config::{user_agent, Config, Credentials};
use crate::libs::messages::Message;
use reqwest::{
    header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, StatusCode, Url,
};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub mod ritual;

pub use ritual::Ritual;

/// Boxed cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of a single request.
///
/// `Client`, `MissingCredentials`, `InvalidUrl`, `InvalidHeader` and `Encode`
/// are local precondition failures raised before anything is sent. The remaining variants describe
/// the outcome of a request that was handed to the transport.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to set up the HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("{}", Message::MissingCredentials)]
    MissingCredentials,
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("Failed to encode the request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Request failed with status code: {status}\nResponse message: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to reach the server: {0}")]
    Transport(#[source] BoxError),
    #[error("Failed to decode the server response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// True when the request never reached the transport.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Client(_)
                | Self::MissingCredentials
                | Self::InvalidUrl { .. }
                | Self::InvalidHeader(_)
                | Self::Encode(_)
        )
    }
}

/// Whether a request carries the Basic authentication header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Auth {
    #[default]
    Basic,
    Anonymous,
}

/// Description of one backend call, independent of the base URL and credentials.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    auth: Auth,
}

impl ApiRequest {
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
            auth: Auth::Basic,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Attaches a JSON body, sent with `Content-Type: application/json`.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Sends the request without an `Authorization` header.
    pub fn anonymous(mut self) -> Self {
        self.auth = Auth::Anonymous;
        self
    }
}

/// Fully resolved request as handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// Raw response as returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a resolved request and returns the raw response.
///
/// Implementations must not retry. DNS, connection and timeout errors are
/// returned as the error value.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(user_agent())
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut builder = self.client.request(request.method, request.url).headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        // The response (and its connection) is released when it goes out of scope
        let res = builder.send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Authenticated request pipeline bound to one base URL and credential set.
pub struct ApiClient<T: Transport = ReqwestTransport> {
    base_url: String,
    credentials: Option<Credentials>,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(config, ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            base_url: config.api_url.clone(),
            credentials: config.credentials.clone(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolves URL and headers for `request`.
    ///
    /// Fails with [`ApiError::MissingCredentials`] when the request needs
    /// authentication and no credentials were configured.
    pub fn prepare(&self, request: &ApiRequest) -> Result<HttpRequest, ApiError> {
        let mut headers = HeaderMap::new();
        if request.auth == Auth::Basic {
            let credentials = self.credentials.as_ref().ok_or(ApiError::MissingCredentials)?;
            tracing::debug!(username = credentials.username(), "using basic authentication");
            let mut value = HeaderValue::from_str(&credentials.basic_auth())?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), request.path.trim_start_matches('/'));
        let parsed = if request.query.is_empty() {
            Url::parse(&url)
        } else {
            Url::parse_with_params(&url, &request.query)
        };
        let url = parsed.map_err(|e| ApiError::InvalidUrl {
            url,
            reason: e.to_string(),
        })?;

        let body = match &request.body {
            Some(body) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Some(serde_json::to_string(body).map_err(ApiError::Encode)?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method: request.method.clone(),
            url,
            headers,
            body,
        })
    }

    /// Executes `request` and returns the raw body of a `200 OK` response.
    ///
    /// Any other status yields [`ApiError::Http`] with the body untouched.
    pub async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let http_request = self.prepare(&request)?;
        tracing::debug!(method = %http_request.method, url = %http_request.url, auth = ?request.auth, "sending request");

        let response = self.transport.send(http_request).await.map_err(|e| {
            tracing::debug!(error = %e, "transport failure");
            ApiError::Transport(e)
        })?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");

        if response.status != StatusCode::OK.as_u16() {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }

    /// Executes `request` and decodes the `200 OK` body as JSON.
    pub async fn execute_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
