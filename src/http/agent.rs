//! HTTP agent factories
//!
//! [`HttpAgent`] creates one [`RequestBuilder`] per verb + absolute URL;
//! [`ApiAgent`] binds an agent to a base URL so call sites only supply
//! endpoint paths.

use std::env;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use super::request::RequestBuilder;
use crate::config;

/// Environment variable overriding the profile service base URL
pub const BASE_URL_ENV: &str = "CLOAK_BASE_URL";

/// Thin factory producing one request builder per HTTP call
#[derive(Debug, Clone)]
pub struct HttpAgent {
    client: reqwest::Client,
    service: String,
    default_timeout: Duration,
}

impl HttpAgent {
    /// Create a new agent for the named service
    pub fn new<S: Into<String>>(service: S) -> Self {
        Self::with_timeout(service, Duration::from_millis(config::DEFAULT_TIMEOUT_MS))
    }

    /// Create a new agent with an explicit default request timeout
    pub fn with_timeout<S: Into<String>>(service: S, default_timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            service: service.into(),
            default_timeout,
        }
    }

    /// Create a request builder for the given verb and absolute URL
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.client.clone(),
            self.service.clone(),
            method,
            url.to_string(),
            self.default_timeout,
        )
    }

    /// Make a GET request
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Make a GET request with query parameters
    pub fn get_with<T: Serialize>(&self, url: &str, params: &T) -> RequestBuilder {
        self.get(url).query(params)
    }

    /// Make a POST request
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    /// Make a PUT request
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    /// Make a PATCH request
    pub fn patch(&self, url: &str) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    /// Make a DELETE request
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Make a DELETE request with query parameters
    pub fn delete_with<T: Serialize>(&self, url: &str, params: &T) -> RequestBuilder {
        self.delete(url).query(params)
    }
}

/// An [`HttpAgent`] bound to a base URL
#[derive(Debug, Clone)]
pub struct ApiAgent {
    agent: HttpAgent,
    base_url: String,
}

impl ApiAgent {
    /// Bind an agent to a base URL (trailing slash trimmed)
    pub fn new<S: Into<String>>(agent: HttpAgent, base_url: S) -> Self {
        let base_url = base_url.into();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL all endpoint paths are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn absolute(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request to an endpoint path
    pub fn get(&self, endpoint: &str) -> RequestBuilder {
        self.agent.get(&self.absolute(endpoint))
    }

    /// Make a POST request to an endpoint path
    pub fn post(&self, endpoint: &str) -> RequestBuilder {
        self.agent.post(&self.absolute(endpoint))
    }

    /// Make a PUT request to an endpoint path
    pub fn put(&self, endpoint: &str) -> RequestBuilder {
        self.agent.put(&self.absolute(endpoint))
    }

    /// Make a PATCH request to an endpoint path
    pub fn patch(&self, endpoint: &str) -> RequestBuilder {
        self.agent.patch(&self.absolute(endpoint))
    }

    /// Make a DELETE request to an endpoint path
    pub fn delete(&self, endpoint: &str) -> RequestBuilder {
        self.agent.delete(&self.absolute(endpoint))
    }
}

/// Create an [`ApiAgent`] for the profile service.
///
/// Base URL resolution order: explicit argument, the `CLOAK_BASE_URL`
/// environment variable, then the built-in default.
pub fn init_agent(service: &str, base_url: Option<&str>) -> ApiAgent {
    let resolved = base_url
        .map(str::to_string)
        .or_else(|| env::var(BASE_URL_ENV).ok())
        .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());

    debug!("Initializing {} agent for {}", service, resolved);

    ApiAgent::new(HttpAgent::new(service), resolved)
}
