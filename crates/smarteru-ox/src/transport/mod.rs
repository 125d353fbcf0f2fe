//! The HTTP seam.
//!
//! The client only needs "POST these form fields to this URL, give me the
//! status and body back". [`HttpTransport`] is that capability; swap in
//! [`MockTransport`] or [`SandboxTransport`] to test without a network.

pub mod mock;
pub mod sandbox;

pub use mock::MockTransport;
pub use sandbox::SandboxTransport;

use async_trait::async_trait;

use crate::SmarterURequestError;

/// Name of the form field every request document travels in.
pub const PACKAGE_FIELD: &str = "package";

/// An outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: reqwest::Method,
    pub url: String,
    /// Form fields, urlencoded into the body.
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    /// A `POST` carrying `package` as its only form field.
    pub fn post_package(url: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            method: reqwest::Method::POST,
            url: url.into(),
            form: vec![(PACKAGE_FIELD.to_string(), package.into())],
        }
    }

    /// First form field called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The request document, if the request carries one.
    pub fn package(&self) -> Option<&str> {
        self.field(PACKAGE_FIELD)
    }
}

/// Status and body of a completed exchange, whatever the status.
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

    /// A `200 OK` with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations report a non-2xx status as a normal [`HttpResponse`];
/// only failures to complete the exchange are errors, and those should be
/// [`SmarterURequestError::Http`].
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SmarterURequestError>;
}

/// The production transport, backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SmarterURequestError> {
        let res = self
            .client
            .request(request.method, &request.url)
            .form(&request.form)
            .send()
            .await?;
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(HttpResponse { status, body })
    }
}
