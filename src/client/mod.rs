//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{
    ApiError, ApiKey, ArgumentError, CreateKeyword, OperatorLookupResponse, Prices, SendSms,
    SendSmsResponse,
};
use crate::transport::{self, Envelope};

/// Base URL used unless overridden with [`ZenSendClientBuilder::base_url`].
pub const DEFAULT_BASE_URL: &str = "https://api.zensend.io";
/// Per-request timeout used unless overridden with [`ZenSendClientBuilder::timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);

const SEND_SMS_PATH: &str = "/v3/sendsms";
const CHECK_BALANCE_PATH: &str = "/v3/checkbalance";
const PRICES_PATH: &str = "/v3/prices";
const OPERATOR_LOOKUP_PATH: &str = "/v3/operator_lookup";
const KEYWORDS_PATH: &str = "/v3/keywords";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    api_key: ApiKey,
    timeout: Duration,
    form: Option<Vec<(String, String)>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    content_type: Option<String>,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let builder = match request.method {
                Method::Get => self.client.get(request.url.as_str()),
                Method::Post => self.client.post(request.url.as_str()),
            };
            let mut builder = builder
                .header(ApiKey::HEADER, request.api_key.as_str())
                .timeout(request.timeout);
            if let Some(form) = request.form.as_ref() {
                builder = builder.form(form);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ZenSendClient`].
///
/// Each variant is a distinct outcome class:
/// - the call was rejected locally before any request was made,
/// - the service answered and reported a failure,
/// - the exchange itself failed (DNS, TLS, timeouts, etc),
/// - the service answered with a body that could not be decoded.
pub enum ZenSendError {
    /// HTTP client / transport failure. The underlying error is preserved as the source.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// ZenSend answered without a `success` payload.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// Request parameters were rejected before any network activity.
    #[error("argument error: {0}")]
    Argument(#[from] ArgumentError),
}

impl ZenSendError {
    /// Returns `true` if the transport gave up because the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(err) => err
                .downcast_ref::<reqwest::Error>()
                .is_some_and(reqwest::Error::is_timeout),
            _ => false,
        }
    }

    /// The service-reported failure, if this is an [`ZenSendError::Api`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ZenSendClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ZenSendClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ZenSendClientBuilder {
    /// Create a builder with the default base URL and timeout.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the ZenSend base URL. Endpoint paths (`/v3/...`) are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ZenSendClient`].
    pub fn build(self) -> Result<ZenSendClient, ZenSendError> {
        url::Url::parse(&self.base_url).map_err(|_| ArgumentError::InvalidBaseUrl {
            url: self.base_url.clone(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ZenSendError::Transport(Box::new(err)))?;

        Ok(ZenSendClient {
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            timeout: self.timeout,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level ZenSend client.
///
/// This type orchestrates request validation, form encoding, and response classification.
/// Every call is a single independent request; clones share the underlying connection pool
/// and the client can be used from many tasks at once.
pub struct ZenSendClient {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    http: Arc<dyn HttpTransport>,
}

impl ZenSendClient {
    /// Create a client using the default base URL and timeout.
    ///
    /// For more customization, use [`ZenSendClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> ZenSendClientBuilder {
        ZenSendClientBuilder::new(api_key)
    }

    /// Send an SMS message to one or more recipients.
    ///
    /// Errors:
    /// - [`ZenSendError::Api`] when ZenSend reports a failure (or replies without JSON),
    /// - [`ZenSendError::Transport`] when the request could not be completed,
    /// - [`ZenSendError::Parse`] for malformed bodies.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, ZenSendError> {
        let params = transport::encode_send_sms_form(&request);
        let success = self
            .execute(Method::Post, SEND_SMS_PATH, None, Some(params))
            .await?;
        transport::decode_send_sms_success(success).map_err(|err| ZenSendError::Parse(Box::new(err)))
    }

    /// Current account balance in pence.
    pub async fn check_balance(&self) -> Result<f64, ZenSendError> {
        let success = self
            .execute(Method::Get, CHECK_BALANCE_PATH, None, None)
            .await?;
        transport::decode_balance_success(success).map_err(|err| ZenSendError::Parse(Box::new(err)))
    }

    /// Price per message in pence, keyed by country code.
    pub async fn get_prices(&self) -> Result<Prices, ZenSendError> {
        let success = self.execute(Method::Get, PRICES_PATH, None, None).await?;
        transport::decode_prices_success(success).map_err(|err| ZenSendError::Parse(Box::new(err)))
    }

    /// Look up the network operator for a number.
    ///
    /// The number is not validated locally. Lookups are charged; a failed lookup may still
    /// report `cost_in_pence` on the returned [`ApiError`].
    pub async fn lookup_operator(
        &self,
        msisdn: &str,
    ) -> Result<OperatorLookupResponse, ZenSendError> {
        let query = transport::encode_operator_lookup_query(msisdn);
        let success = self
            .execute(Method::Get, OPERATOR_LOOKUP_PATH, Some(query), None)
            .await?;
        transport::decode_operator_lookup_success(success)
            .map_err(|err| ZenSendError::Parse(Box::new(err)))
    }

    /// Create an inbound keyword. The `success` payload is returned as sent by ZenSend.
    pub async fn create_keyword(&self, request: CreateKeyword) -> Result<Value, ZenSendError> {
        let params = transport::encode_create_keyword_form(&request);
        self.execute(Method::Post, KEYWORDS_PATH, None, Some(params))
            .await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Option<String>,
        form: Option<Vec<(String, String)>>,
    ) -> Result<Value, ZenSendError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(query) = query {
            url.push('?');
            url.push_str(&query);
        }

        debug!(method = method.as_str(), path, "sending ZenSend request");
        let response = self
            .http
            .send(HttpRequest {
                method,
                url,
                api_key: self.api_key.clone(),
                timeout: self.timeout,
                form,
            })
            .await
            .map_err(|err| {
                debug!(path, error = %err, "ZenSend request did not complete");
                ZenSendError::Transport(err)
            })?;

        debug!(
            path,
            status = response.status,
            content_type = response.content_type.as_deref(),
            "received ZenSend response"
        );

        if !transport::is_json_content_type(response.content_type.as_deref()) {
            warn!(path, status = response.status, "ZenSend response is not JSON");
            return Err(ApiError::from_status(response.status).into());
        }

        let envelope = transport::decode_envelope(response.status, &response.body)
            .map_err(|err| ZenSendError::Parse(Box::new(err)))?;

        match envelope {
            Envelope::Success(success) => Ok(success),
            Envelope::Failure(err) => {
                warn!(
                    path,
                    status = err.status_code,
                    fail_code = err.fail_code.as_deref(),
                    parameter = err.parameter.as_deref(),
                    "ZenSend reported a failure"
                );
                Err(err.into())
            }
            Envelope::Unrecognized => {
                warn!(
                    path,
                    status = response.status,
                    "ZenSend response has neither success nor failure"
                );
                Err(ApiError::from_status(response.status).into())
            }
        }
    }
}
