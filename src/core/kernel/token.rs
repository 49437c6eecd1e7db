use crate::core::config::{KudaConfig, SettlementConfig};
use crate::core::errors::KudaError;
use crate::core::kernel::dispatch::ApiCall;
use crate::core::kernel::envelope::EnvelopeBuilder;
use crate::core::kernel::normalize::normalize;
use crate::core::kernel::transport::{HttpReply, HttpRequest};
use crate::core::types::ServiceType;
use reqwest::Method;
use secrecy::{ExposeSecret, Secret};
use serde_json::{json, Value};
use std::fmt;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

pub const TOKEN_PATH: &str = "/Account/GetToken";
pub const PARTNER_AUTH_PATH: &str = "/api/Auth/authenticate";

const TOKEN_REJECTED_MESSAGE: &str = "Unable to get access token, It's likely that you provided an invalid credential \
     or your apiKey has expired. You can always generate a new apiKey from your developer account";

/// How a client obtains its bearer token
#[derive(Clone)]
pub enum AuthScheme {
    /// Core API: `POST {base}/Account/GetToken`, the response text is the token
    Kuda {
        email: String,
        api_key: Secret<String>,
    },
    /// Partner API: no-op envelope to `{base}/api/Auth/authenticate`,
    /// token found under `data.auth_token`
    Partner {
        secret_key: Secret<String>,
        client_password: Secret<String>,
    },
}

impl fmt::Debug for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kuda { email, .. } => f
                .debug_struct("Kuda")
                .field("email", email)
                .field("api_key", &"[REDACTED]")
                .finish(),
            Self::Partner { .. } => f
                .debug_struct("Partner")
                .field("secret_key", &"[REDACTED]")
                .field("client_password", &"[REDACTED]")
                .finish(),
        }
    }
}

impl From<&KudaConfig> for AuthScheme {
    fn from(config: &KudaConfig) -> Self {
        Self::Kuda {
            email: config.email.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl From<&SettlementConfig> for AuthScheme {
    fn from(config: &SettlementConfig) -> Self {
        Self::Partner {
            secret_key: config.secret_key.clone(),
            client_password: config.client_password.clone(),
        }
    }
}

impl AuthScheme {
    /// The unauthenticated bootstrap request for this scheme
    pub fn token_request(&self, envelopes: &EnvelopeBuilder) -> HttpRequest {
        match self {
            Self::Kuda { email, api_key } => HttpRequest {
                method: Method::POST,
                url: envelopes.url(Some(TOKEN_PATH)),
                headers: envelopes.headers(None),
                body: Some(json!({
                    "email": email,
                    "apiKey": api_key.expose_secret(),
                })),
            },
            Self::Partner {
                secret_key,
                client_password,
            } => {
                let call = ApiCall::new(ServiceType::NoOp)
                    .with_payload(json!({
                        "secretKey": secret_key.expose_secret(),
                        "clientPassword": client_password.expose_secret(),
                    }))
                    .with_endpoint(PARTNER_AUTH_PATH);
                envelopes.build(&call, None).into_request(Method::POST)
            }
        }
    }

    /// Extract the bearer token from the bootstrap reply
    pub fn token_from_reply(&self, reply: &HttpReply) -> Result<String, KudaError> {
        match self {
            Self::Kuda { .. } => {
                if reply.status == 200 {
                    return Ok(reply.text());
                }
                warn!(status = reply.status, "token request rejected");
                Err(KudaError::Authentication(rejection_message(reply)))
            }
            Self::Partner { .. } => {
                let response = normalize(reply.status, &reply.body)?;
                let token = response
                    .data
                    .as_ref()
                    .and_then(|data| data.get("auth_token"))
                    .and_then(Value::as_str);

                match token {
                    Some(token) => Ok(token.to_string()),
                    None => {
                        warn!(status = reply.status, "partner token request rejected");
                        Err(KudaError::Authentication(format!(
                            "Unable to get access token for instant settlement. {}. \
                             Please ensure valid credentials were provided",
                            response.message.unwrap_or_default()
                        )))
                    }
                }
            }
        }
    }
}

fn rejection_message(reply: &HttpReply) -> String {
    let remote = serde_json::from_slice::<Value>(&reply.body)
        .ok()
        .and_then(|body| {
            body.get("message")
                .or_else(|| body.get("Message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .or_else(|| {
            let text = reply.text();
            (!text.trim().is_empty()).then(|| text.trim().to_string())
        });

    match remote {
        Some(remote) => format!("{} (status {}: {})", TOKEN_REJECTED_MESSAGE, reply.status, remote),
        None => format!("{} (status {})", TOKEN_REJECTED_MESSAGE, reply.status),
    }
}

/// Token cache for the suspending client.
///
/// The lock is held while a token is fetched, so concurrent first calls
/// authenticate once. A failed fetch leaves the cache empty.
#[derive(Default)]
pub struct TokenCell {
    token: tokio::sync::Mutex<Option<Secret<String>>>,
}

impl TokenCell {
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<String, KudaError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, KudaError>>,
    {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            debug!("using cached token");
            return Ok(token.expose_secret().clone());
        }

        debug!("no cached token, authenticating");
        let token = fetch().await?;
        *slot = Some(Secret::new(token.clone()));
        Ok(token)
    }

    pub async fn clear(&self) {
        *self.token.lock().await = None;
    }

    pub async fn is_cached(&self) -> bool {
        self.token.lock().await.is_some()
    }
}

impl fmt::Debug for TokenCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCell").finish_non_exhaustive()
    }
}

/// Token cache for the blocking client; same contract as [`TokenCell`].
#[derive(Default)]
pub struct BlockingTokenCell {
    token: Mutex<Option<Secret<String>>>,
}

impl BlockingTokenCell {
    pub fn get_or_fetch<F>(&self, fetch: F) -> Result<String, KudaError>
    where
        F: FnOnce() -> Result<String, KudaError>,
    {
        // A panic in another caller cannot leave a half-written token behind.
        let mut slot = self.token.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = slot.as_ref() {
            debug!("using cached token");
            return Ok(token.expose_secret().clone());
        }

        debug!("no cached token, authenticating");
        let token = fetch()?;
        *slot = Some(Secret::new(token.clone()));
        Ok(token)
    }

    pub fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_cached(&self) -> bool {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl fmt::Debug for BlockingTokenCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockingTokenCell").finish_non_exhaustive()
    }
}
