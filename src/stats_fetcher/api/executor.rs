//! Single-request executor: one GET, outcome classification, bounded retries

use http::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::http_client::{HttpTransport, ReqwestTransport};
use crate::config::Config;
use crate::constants::{self, API_KEY_HEADER};
use crate::error::{AppError, TransportError};

/// How often and how far apart a request is attempted when the transport
/// fails. HTTP statuses are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` counts the first attempt; zero is treated as one.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Same attempt budget with no pause between attempts.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            constants::retry::MAX_ATTEMPTS,
            Duration::from_millis(constants::retry::DELAY_MS),
        )
    }
}

/// What a request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// HTTP 200 with a JSON body.
    Success(Value),
    /// The server answered with something other than 200.
    Status(u16),
    /// No status was obtained within the attempt budget.
    NoResponse,
}

impl RequestOutcome {
    /// Status code of the outcome; 0 when no response was obtained.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success(_) => StatusCode::OK.as_u16(),
            Self::Status(code) => *code,
            Self::NoResponse => 0,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_payload(self) -> Option<Value> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Issues authenticated GETs against the statistics API.
///
/// The executor holds no per-request state, so one instance can serve any
/// number of concurrent lookups.
pub struct RequestExecutor<T = ReqwestTransport> {
    transport: T,
    headers: HeaderMap,
    policy: RetryPolicy,
}

impl RequestExecutor<ReqwestTransport> {
    /// Builds an executor with a pooled reqwest client using the configured
    /// timeout, key and retry policy.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::with_timeout(config.http_timeout_seconds)?;
        Self::new(transport, &config.api_key, config.retry_policy())
    }
}

impl<T: HttpTransport> RequestExecutor<T> {
    pub fn new(transport: T, api_key: &str, policy: RetryPolicy) -> Result<Self, AppError> {
        let mut value = HeaderValue::from_str(api_key).map_err(|_| {
            AppError::config_error("API key contains characters not allowed in an HTTP header")
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), value);

        Ok(Self {
            transport,
            headers,
            policy,
        })
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Performs the GET and classifies the result.
    ///
    /// * 200 with a JSON body → `Success`
    /// * any other status → `Status(code)`, returned immediately
    /// * transport failure (including an unreadable or non-JSON 200 body) →
    ///   retried with the fixed delay, `NoResponse` once attempts run out
    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> RequestOutcome {
        let mut attempt = 0u32;
        loop {
            attempt += 1;

            let failure = match self.transport.get(url, &self.headers).await {
                Ok(response) if response.status == StatusCode::OK.as_u16() => {
                    match serde_json::from_str::<Value>(&response.body) {
                        Ok(payload) => {
                            debug!("Received {} bytes from {url}", response.body.len());
                            return RequestOutcome::Success(payload);
                        }
                        Err(e) => TransportError::Decode {
                            url: url.to_string(),
                            message: e.to_string(),
                        },
                    }
                }
                Ok(response) => {
                    debug!("HTTP {} from {url}", response.status);
                    return RequestOutcome::Status(response.status);
                }
                Err(e) => e,
            };

            if attempt >= self.policy.max_attempts {
                error!("Giving up on {url} after {attempt} attempt(s): {failure}");
                return RequestOutcome::NoResponse;
            }

            warn!(
                "{failure}. Retrying in {:?} (attempt {}/{})",
                self.policy.delay,
                attempt + 1,
                self.policy.max_attempts
            );
            if !self.policy.delay.is_zero() {
                tokio::time::sleep(self.policy.delay).await;
            }
        }
    }
}
