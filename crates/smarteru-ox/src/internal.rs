use std::sync::Arc;

#[cfg(feature = "leaky-bucket")]
use leaky_bucket::RateLimiter;

use crate::{
    SmarterURequestError,
    request::Method,
    response::{ApiResponse, FromInfo, parse_response},
    transport::{HttpRequest, HttpTransport},
};

/// Posts packages through the client's transport and classifies the answer.
#[derive(Clone)]
pub(crate) struct SmarterURequestHelper {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    #[cfg(feature = "leaky-bucket")]
    leaky_bucket: Option<Arc<RateLimiter>>,
}

impl std::fmt::Debug for SmarterURequestHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmarterURequestHelper")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl SmarterURequestHelper {
    pub(crate) fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.to_string(),
            #[cfg(feature = "leaky-bucket")]
            leaky_bucket: None,
        }
    }

    #[cfg(feature = "leaky-bucket")]
    pub(crate) fn with_leaky_bucket(mut self, leaky_bucket: Option<Arc<RateLimiter>>) -> Self {
        self.leaky_bucket = leaky_bucket;
        self
    }

    /// Send one package and return the body of a 2xx answer.
    pub(crate) async fn post(
        &self,
        method: Method,
        package: String,
    ) -> Result<String, SmarterURequestError> {
        #[cfg(feature = "leaky-bucket")]
        if let Some(ref limiter) = self.leaky_bucket {
            limiter.acquire_one().await;
        }

        log::debug!("Sending {method} to {}", self.base_url);
        let response = self
            .transport
            .send(HttpRequest::post_package(&self.base_url, package))
            .await?;

        if !response.is_success() {
            return Err(status_error(response.status, &self.base_url));
        }
        Ok(response.body)
    }

    /// Send one package and parse the answer into `T`.
    pub(crate) async fn call<T: FromInfo>(
        &self,
        method: Method,
        package: String,
    ) -> Result<ApiResponse<T>, SmarterURequestError> {
        let body = self.post(method, package).await?;
        parse_response(&body)
    }
}

/// `Client error: POST {url} resulted in a `404 Not Found` response`
fn status_error(status: u16, url: &str) -> SmarterURequestError {
    let kind = match status {
        400..=499 => "Client error",
        500..=599 => "Server error",
        _ => "Unexpected status",
    };
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(|reason| format!(" {reason}"))
        .unwrap_or_default();
    SmarterURequestError::Http(format!(
        "{kind}: POST {url} resulted in a `{status}{reason}` response"
    ))
}
