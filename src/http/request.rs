//! Fluent HTTP request wrapper with deferred configuration
//!
//! A [`RequestBuilder`] assembles exactly one outbound call: it accumulates
//! method, URL, headers and body through chained calls, runs queued
//! asynchronous configuration steps to completion before dispatch, applies
//! the selected body encoding exactly once, and maps transport failures to
//! the typed error taxonomy.

use std::collections::HashMap;
use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::encoding::{self, BodyEncoding};
use crate::{Error, Result};

/// In-progress request state, visible to deferred actions so they can still
/// mutate headers and body before dispatch
#[derive(Debug, Default)]
pub struct RequestState {
    /// Header mapping; key unique, last write wins
    pub headers: HashMap<String, String>,
    /// Request body payload, untyped at this layer
    pub body: Option<Value>,
    /// Query-string payload (GET/DELETE calls)
    pub query: Option<Value>,
}

/// An asynchronous configuration step, guaranteed to run to completion in
/// enqueue order before the request is sent.
///
/// Actions take the in-progress state by value and hand it back, so they can
/// still mutate headers and body without borrowing across an await point.
pub type DeferredAction =
    Box<dyn FnOnce(RequestState) -> BoxFuture<'static, Result<RequestState>> + Send>;

/// Builds and dispatches one HTTP call against the profile service.
///
/// Created per logical API call by an [`HttpAgent`](super::agent::HttpAgent),
/// configured through chaining, and consumed exactly once by [`send`].
/// Not meant to be shared across concurrent call sites.
///
/// [`send`]: RequestBuilder::send
pub struct RequestBuilder {
    client: reqwest::Client,
    method: Method,
    url: String,
    state: RequestState,
    deferred: Vec<DeferredAction>,
    encoding: BodyEncoding,
    origin_service: String,
    default_timeout: Duration,
    /// Serialization failure captured during configuration, surfaced at send
    build_error: Option<serde_json::Error>,
}

impl RequestBuilder {
    /// Create a new request builder for one verb + URL
    pub(crate) fn new(
        client: reqwest::Client,
        origin_service: String,
        method: Method,
        url: String,
        default_timeout: Duration,
    ) -> Self {
        Self {
            client,
            method,
            url,
            state: RequestState::default(),
            deferred: Vec::new(),
            encoding: BodyEncoding::default(),
            origin_service,
            default_timeout,
            build_error: None,
        }
    }

    /// Set a single header value; last write wins per key
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.state.headers.insert(key.into(), value.into());
        self
    }

    /// Merge multiple headers at once; last write wins per key
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.state.headers.extend(headers);
        self
    }

    /// Set the request body; the last call wins
    pub fn body<T: Serialize>(mut self, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => self.state.body = Some(value),
            Err(err) => self.build_error = Some(err),
        }
        self
    }

    /// Set the query-string payload
    pub fn query<T: Serialize>(mut self, params: &T) -> Self {
        match serde_json::to_value(params) {
            Ok(value) => self.state.query = Some(value),
            Err(err) => self.build_error = Some(err),
        }
        self
    }

    /// Append an asynchronous configuration step to the ordered queue.
    ///
    /// Every queued action runs to completion, in enqueue order, before any
    /// network I/O; a failing action aborts the request before dispatch.
    pub fn defer<F>(mut self, action: F) -> Self
    where
        F: FnOnce(RequestState) -> BoxFuture<'static, Result<RequestState>> + Send + 'static,
    {
        self.deferred.push(Box::new(action));
        self
    }

    /// Enable distributed tracing on the request
    pub fn track(self) -> Self {
        let service = self.origin_service.clone();
        self.header("X-Origin-Service", service)
    }

    /// Require an `Authorization` header to be present at dispatch time.
    ///
    /// Checked after all other deferred actions have run, so an action that
    /// fetches a token asynchronously still satisfies the requirement.
    pub fn require_authorization(self) -> Self {
        let url = self.url.clone();
        self.defer(move |state| {
            Box::pin(async move {
                if state
                    .headers
                    .keys()
                    .any(|k| k.eq_ignore_ascii_case("authorization"))
                {
                    Ok(state)
                } else {
                    Err(Error::authorization(url))
                }
            })
        })
    }

    /// Select the body encoding; mutually exclusive, applied exactly once
    /// at dispatch
    pub fn encoding(mut self, encoding: BodyEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Switch to the flatten form-urlencoded strategy
    pub fn form_flatten(self) -> Self {
        self.encoding(BodyEncoding::FormFlatten)
    }

    /// Switch to the `profileData` envelope form-urlencoded strategy
    pub fn form_envelope(self) -> Self {
        self.encoding(BodyEncoding::FormEnvelope)
    }

    /// Run the request and decode the response body.
    ///
    /// Deferred actions run first, in enqueue order; the selected encoding is
    /// then applied and exactly one transport call is issued with the given
    /// timeout (the agent default when `None`). A 2xx response decodes to its
    /// JSON body, with an empty body decoding to `{}`. The wrapper performs
    /// no retries.
    pub async fn send(mut self, timeout: Option<Duration>) -> Result<Value> {
        if let Some(err) = self.build_error.take() {
            return Err(err.into());
        }

        // All deferred actions must complete before any network I/O
        let mut state = std::mem::take(&mut self.state);
        for action in self.deferred.drain(..) {
            state = action(state).await?;
        }

        let timeout = timeout.unwrap_or(self.default_timeout);
        let timeout_ms = timeout.as_millis() as u64;

        let mut request = self
            .client
            .request(self.method.clone(), &self.url)
            .timeout(timeout);

        if let Some(query) = &state.query {
            let pairs = encoding::flatten_pairs(query);
            request = request.query(&pairs);
        }

        let has_content_type = state
            .headers
            .keys()
            .any(|k| k.eq_ignore_ascii_case("content-type"));

        for (key, value) in &state.headers {
            request = request.header(key, value);
        }

        // Encoding is applied exactly once, after deferred actions
        if let Some(body) = &state.body {
            if !has_content_type {
                request = request.header("Content-Type", self.encoding.content_type());
            }
            request = match self.encoding {
                BodyEncoding::Json => request.body(serde_json::to_vec(body)?),
                BodyEncoding::FormFlatten => request.body(encoding::encode_form_flatten(body)),
                BodyEncoding::FormEnvelope => request.body(encoding::encode_form_envelope(body)?),
            };
        }

        debug!("Dispatching {} {}", self.method, self.url);

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(map_transport_error(&self.url, timeout_ms, err)),
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(&self.url, e.to_string()))?;

        if !status.is_success() {
            let body = decode_error_body(&text);
            return Err(Error::api(&self.url, status.as_u16(), body));
        }

        decode_success_body(&text)
    }

    /// Run the request and deserialize the response body into `T`
    pub async fn send_as<T: DeserializeOwned>(self, timeout: Option<Duration>) -> Result<T> {
        let value = self.send(timeout).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Translate a reqwest send failure into the typed taxonomy
fn map_transport_error(url: &str, timeout_ms: u64, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout(url, timeout_ms)
    } else {
        Error::transport(url, err.to_string())
    }
}

/// A successful response with an empty body decodes to `{}`, not a parse
/// failure
fn decode_success_body(text: &str) -> Result<Value> {
    if text.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(text)?)
}

/// Error bodies are kept raw: non-JSON content is preserved as a string so
/// callers can still inspect what the service returned
fn decode_error_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Object(serde_json::Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
