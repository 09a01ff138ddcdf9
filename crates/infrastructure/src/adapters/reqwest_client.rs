//! Form client implementation using reqwest.
//!
//! This adapter implements the `FormClient` port using the reqwest library.
//! Redirects are never followed: the probe needs the first response and its
//! `Location` header.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use formprobe_application::{FormClient, FormClientError, FormRequest};
use formprobe_domain::FormResponse;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use tracing::trace;
use url::Url;

use crate::http::{FORM_CONTENT_TYPE, encode_form};

/// Form client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `FormClient` port from the
/// application layer.
pub struct ReqwestFormClient {
    client: Client,
}

impl ReqwestFormClient {
    /// Creates a new client with redirect following disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, FormClientError> {
        let client = Client::builder()
            .user_agent(concat!("formprobe/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| FormClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a client from a custom reqwest client.
    ///
    /// The client must be built with `redirect::Policy::none()`, otherwise
    /// redirects are followed and their target never reaches the probe.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Maps reqwest errors to `FormClientError`.
    ///
    /// Connect errors win over timeouts, so a connect timeout is reported
    /// as an unreachable server.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> FormClientError {
        if error.is_connect() {
            return FormClientError::ConnectionFailed(describe(error));
        }

        if error.is_timeout() {
            return FormClientError::Timeout { timeout_ms };
        }

        if error.is_builder() {
            return FormClientError::InvalidUrl(describe(error));
        }

        FormClientError::Other(describe(error))
    }
}

/// Parses the endpoint URL and accepts only http and https.
fn endpoint(raw: &str) -> Result<Url, FormClientError> {
    let url = Url::parse(raw).map_err(|e| FormClientError::InvalidUrl(format!("{e}: {raw}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(FormClientError::InvalidUrl(format!(
            "unsupported scheme '{scheme}' in {raw}"
        ))),
    }
}

/// Renders an error with its source chain, e.g.
/// `error sending request: client error (Connect): Connection refused`.
fn describe(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl FormClient for ReqwestFormClient {
    fn post_form<'a>(
        &'a self,
        request: &'a FormRequest,
    ) -> Pin<Box<dyn Future<Output = Result<FormResponse, FormClientError>> + Send + 'a>> {
        Box::pin(async move {
            let url = endpoint(&request.url)?;
            let body = encode_form(&request.fields)?;
            let timeout_ms = u64::try_from(request.timeout.as_millis()).unwrap_or(u64::MAX);

            let response = self
                .client
                .post(url)
                .timeout(request.timeout)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(LOCATION)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
            trace!(status, ?location, "received form response");

            Ok(FormResponse {
                status: status.into(),
                location,
            })
        })
    }
}
