use crate::core::config::{KudaConfig, SettlementConfig, TransportConfig};
use crate::core::errors::KudaError;
use crate::core::kernel::{
    normalize, resolve_verb, ApiCall, AuthScheme, Envelope, EnvelopeBuilder, ReqwestTransport,
    TokenCell, Transport,
};
use crate::core::traits::ApiWrapper;
use crate::core::types::ApiResponse;
use async_trait::async_trait;
use tracing::{instrument, trace};

/// Non-blocking Kuda client.
///
/// Authenticates lazily on the first call and reuses the token for the
/// lifetime of the client. Concurrent first calls share one token request.
pub struct AsyncKudaClient<T: Transport = ReqwestTransport> {
    transport: T,
    envelopes: EnvelopeBuilder,
    auth: AuthScheme,
    token: TokenCell,
}

impl AsyncKudaClient<ReqwestTransport> {
    /// Client for the core banking API with default transport settings
    pub fn new(config: KudaConfig) -> Result<Self, KudaError> {
        let transport_config = TransportConfig::default();
        let envelopes =
            EnvelopeBuilder::new(config.effective_base_url(), transport_config.user_agent.clone());
        let transport = ReqwestTransport::new(transport_config)?;
        Ok(Self::with_transport(transport, envelopes, AuthScheme::from(&config)))
    }

    /// Client for the partner instant settlement API
    pub fn instant_settlement(config: SettlementConfig) -> Result<Self, KudaError> {
        let transport_config = TransportConfig::default();
        let envelopes =
            EnvelopeBuilder::new(config.effective_base_url(), transport_config.user_agent.clone());
        let transport = ReqwestTransport::new(transport_config)?;
        Ok(Self::with_transport(transport, envelopes, AuthScheme::from(&config)))
    }
}

impl<T: Transport> AsyncKudaClient<T> {
    pub fn with_transport(transport: T, envelopes: EnvelopeBuilder, auth: AuthScheme) -> Self {
        Self {
            transport,
            envelopes,
            auth,
            token: TokenCell::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.envelopes.base_url()
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Forget the cached token; the next call authenticates again
    pub async fn clear_token(&self) {
        self.token.clear().await;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.is_cached().await
    }
}

#[async_trait]
impl<T: Transport> ApiWrapper for AsyncKudaClient<T> {
    async fn get_token(&self) -> Result<String, KudaError> {
        self.token
            .get_or_fetch(|| async {
                let request = self.auth.token_request(&self.envelopes);
                let reply = self.transport.send(request).await.map_err(KudaError::from)?;
                self.auth.token_from_reply(&reply)
            })
            .await
    }

    async fn build_envelope(
        &self,
        call: &ApiCall,
        exclude_auth: bool,
    ) -> Result<Envelope, KudaError> {
        if exclude_auth {
            return Ok(self.envelopes.build(call, None));
        }
        let token = self.get_token().await?;
        Ok(self.envelopes.build(call, Some(&token)))
    }

    #[instrument(
        skip(self, call),
        fields(service_type = %call.service_type, method = %call.method, endpoint = ?call.endpoint)
    )]
    async fn api_call(&self, call: ApiCall) -> Result<ApiResponse, KudaError> {
        let method = resolve_verb(call.method);
        let envelope = self.build_envelope(&call, false).await?;
        let reply = self.transport.send(envelope.into_request(method)).await?;

        trace!(status = reply.status, body = %reply.text(), "api call completed");
        normalize(reply.status, &reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::TransportError;
    use crate::core::types::{HttpMethod, ServiceType};
    use crate::testing::ScriptedTransport;
    use secrecy::Secret;
    use serde_json::json;
    use std::sync::Arc;

    const BODY: &str = r#"{"status":"successful","message":"ok","data":{"k":1}}"#;

    fn client(transport: Arc<ScriptedTransport>) -> AsyncKudaClient<Arc<ScriptedTransport>> {
        AsyncKudaClient::with_transport(
            transport,
            EnvelopeBuilder::new("https://kuda.test/v2.1", "kuda-rs/test"),
            AuthScheme::Kuda {
                email: "dev@example.com".to_string(),
                api_key: Secret::new("key".to_string()),
            },
        )
    }

    #[tokio::test]
    async fn test_token_fetched_once_across_calls() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, "abc123")
                .reply(200, BODY)
                .reply(200, BODY),
        );
        let client = client(transport.clone());

        client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap();
        client.api_call(ApiCall::new(ServiceType::AdminRetrieveMainAccountBalance)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].url, "https://kuda.test/v2.1/Account/GetToken");
        assert_eq!(requests[1].header("authorization"), Some("Bearer abc123"));
        assert_eq!(requests[2].header("authorization"), Some("Bearer abc123"));
        assert_eq!(requests[1].url, "https://kuda.test/v2.1");
        assert!(client.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_standard_body_is_normalized() {
        let transport = Arc::new(ScriptedTransport::new().reply(200, "abc123").reply(200, BODY));
        let client = client(transport.clone());

        let response = client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.status.as_deref(), Some("successful"));
        assert_eq!(response.message.as_deref(), Some("ok"));
        assert_eq!(response.data, Some(json!({"k": 1})));
    }

    #[tokio::test]
    async fn test_rejected_token_is_not_cached() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(401, r#"{"message":"expired apiKey"}"#)
                .reply(200, "abc123")
                .reply(200, BODY),
        );
        let client = client(transport.clone());

        let err = client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap_err();
        assert!(matches!(err, KudaError::Authentication(_)));
        assert_eq!(transport.request_count(), 1);
        assert!(!client.is_authenticated().await);

        // next call authenticates again
        client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap();
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_timeout_becomes_connection_error() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, "abc123")
                .fail(TransportError::Timeout("read timed out".to_string())),
        );
        let client = client(transport);

        let err = client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap_err();
        assert!(matches!(err, KudaError::Connection(_)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_html_body_is_invalid_response() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, "abc123")
                .reply(200, "<html>maintenance</html>"),
        );
        let client = client(transport);

        let err = client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap_err();
        assert_eq!(err.status_code(), Some(200));
    }

    #[tokio::test]
    async fn test_unsupported_verb_sends_nothing() {
        let transport = Arc::new(ScriptedTransport::new().reply(200, "abc123"));
        let client = client(transport.clone());

        let err = client
            .api_call_with_verb("TRACE", ApiCall::new(ServiceType::BankList))
            .await
            .unwrap_err();
        assert!(matches!(err, KudaError::UnsupportedMethod(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_verb_is_forwarded() {
        let transport = Arc::new(ScriptedTransport::new().reply(200, "abc123").reply(200, BODY));
        let client = client(transport.clone());

        client
            .api_call(ApiCall::new(ServiceType::BankList).with_method(HttpMethod::Put))
            .await
            .unwrap();
        assert_eq!(transport.requests()[1].method, reqwest::Method::PUT);
    }

    #[tokio::test]
    async fn test_excluded_auth_skips_token() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = client(transport.clone());

        let envelope = client
            .build_envelope(&ApiCall::new(ServiceType::BankList), true)
            .await
            .unwrap();
        assert!(envelope.header("authorization").is_none());
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_first_calls_authenticate_once() {
        let mut transport = ScriptedTransport::new().reply(200, "abc123");
        for _ in 0..8 {
            transport = transport.reply(200, BODY);
        }
        let transport = Arc::new(transport);
        let client = client(transport.clone());

        let calls = (0..8).map(|_| client.api_call(ApiCall::new(ServiceType::BankList)));
        let results = futures::future::join_all(calls).await;

        assert!(results.iter().all(Result::is_ok));
        let token_requests = transport
            .requests()
            .iter()
            .filter(|r| r.url.ends_with("/Account/GetToken"))
            .count();
        assert_eq!(token_requests, 1);
    }

    #[tokio::test]
    async fn test_clear_token_forces_reauthentication() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, "first")
                .reply(200, BODY)
                .reply(200, "second")
                .reply(200, BODY),
        );
        let client = client(transport.clone());

        client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap();
        client.clear_token().await;
        client.api_call(ApiCall::new(ServiceType::BankList)).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[3].header("authorization"), Some("Bearer second"));
    }

    #[tokio::test]
    async fn test_partner_client_reads_nested_token() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, r#"{"status":true,"data":{"auth_token":"jwt"}}"#)
                .reply(200, BODY),
        );
        let client = AsyncKudaClient::with_transport(
            transport.clone(),
            EnvelopeBuilder::new("https://partners.test", "kuda-rs/test"),
            AuthScheme::Partner {
                secret_key: Secret::new("s".to_string()),
                client_password: Secret::new("p".to_string()),
            },
        );

        let call = ApiCall::new(ServiceType::NoOp)
            .with_payload(json!({"transactionId": "tx-1"}))
            .with_endpoint("/api/terminal/settlementstatus");
        client.api_call(call).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://partners.test/api/Auth/authenticate");
        assert_eq!(requests[1].header("authorization"), Some("Bearer jwt"));
        assert!(requests[1].body.as_ref().unwrap().get("servicetype").is_none());
    }
}
