use std::time::Duration;

use async_trait::async_trait;
use graphops_core::{Method, RequestEnvelope};
use thiserror::Error;
use tracing::debug;

use crate::dispatch::Dispatcher;

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("invalid request for {method} {url}")]
    Build {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} failed")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    /// Accept self-signed or otherwise invalid TLS certificates.
    pub insecure: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
        }
    }
}

/// Sends envelopes over HTTP with `reqwest`, authenticating with basic auth.
///
/// The raw `reqwest::Response` is returned for any status code; only
/// transport failures become errors.
#[derive(Debug, Clone)]
pub struct ReqwestDispatcher {
    http: reqwest::Client,
}

impl ReqwestDispatcher {
    pub fn new(config: &HttpConfig) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(DispatchError::Client)?;
        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    pub fn build_request(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<reqwest::Request, DispatchError> {
        let mut builder = self
            .http
            .request(to_reqwest_method(envelope.method), &envelope.url)
            .basic_auth(
                &envelope.credentials.principal,
                Some(&envelope.credentials.secret),
            );

        if !envelope.request_id.is_empty() {
            builder = builder.header(REQUEST_ID_HEADER, &envelope.request_id);
        }
        for (name, value) in envelope.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(body) = &envelope.body {
            builder = builder.body(body.to_text());
        }

        builder.build().map_err(|source| DispatchError::Build {
            method: envelope.method,
            url: envelope.url.clone(),
            source,
        })
    }
}

#[async_trait]
impl Dispatcher for ReqwestDispatcher {
    type Response = reqwest::Response;
    type Error = DispatchError;

    async fn dispatch(
        &self,
        envelope: RequestEnvelope,
    ) -> Result<reqwest::Response, DispatchError> {
        let request = self.build_request(&envelope)?;
        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|source| DispatchError::Transport {
                method: envelope.method,
                url: envelope.url.clone(),
                source,
            })?;
        debug!(url = %envelope.url, status = %resp.status(), "response");
        Ok(resp)
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}
