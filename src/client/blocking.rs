use crate::core::config::{KudaConfig, SettlementConfig, TransportConfig};
use crate::core::errors::KudaError;
use crate::core::kernel::{
    normalize, resolve_verb, ApiCall, AuthScheme, BlockingTokenCell, BlockingTransport, Envelope,
    EnvelopeBuilder, ReqwestBlockingTransport,
};
use crate::core::traits::BlockingApiWrapper;
use crate::core::types::ApiResponse;
use tracing::{instrument, trace};

/// Blocking Kuda client; same contract as [`super::AsyncKudaClient`].
///
/// The default transport must not be created or dropped on an async runtime
/// thread.
pub struct KudaClient<T: BlockingTransport = ReqwestBlockingTransport> {
    transport: T,
    envelopes: EnvelopeBuilder,
    auth: AuthScheme,
    token: BlockingTokenCell,
}

impl KudaClient<ReqwestBlockingTransport> {
    pub fn new(config: KudaConfig) -> Result<Self, KudaError> {
        let transport_config = TransportConfig::default();
        let envelopes =
            EnvelopeBuilder::new(config.effective_base_url(), transport_config.user_agent.clone());
        let transport = ReqwestBlockingTransport::new(transport_config)?;
        Ok(Self::with_transport(transport, envelopes, AuthScheme::from(&config)))
    }

    pub fn instant_settlement(config: SettlementConfig) -> Result<Self, KudaError> {
        let transport_config = TransportConfig::default();
        let envelopes =
            EnvelopeBuilder::new(config.effective_base_url(), transport_config.user_agent.clone());
        let transport = ReqwestBlockingTransport::new(transport_config)?;
        Ok(Self::with_transport(transport, envelopes, AuthScheme::from(&config)))
    }
}

impl<T: BlockingTransport> KudaClient<T> {
    pub fn with_transport(transport: T, envelopes: EnvelopeBuilder, auth: AuthScheme) -> Self {
        Self {
            transport,
            envelopes,
            auth,
            token: BlockingTokenCell::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.envelopes.base_url()
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn clear_token(&self) {
        self.token.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_cached()
    }
}

impl<T: BlockingTransport> BlockingApiWrapper for KudaClient<T> {
    fn get_token(&self) -> Result<String, KudaError> {
        self.token.get_or_fetch(|| {
            let request = self.auth.token_request(&self.envelopes);
            let reply = self.transport.send(request)?;
            self.auth.token_from_reply(&reply)
        })
    }

    fn build_envelope(&self, call: &ApiCall, exclude_auth: bool) -> Result<Envelope, KudaError> {
        if exclude_auth {
            return Ok(self.envelopes.build(call, None));
        }
        let token = self.get_token()?;
        Ok(self.envelopes.build(call, Some(&token)))
    }

    #[instrument(
        skip(self, call),
        fields(service_type = %call.service_type, method = %call.method, endpoint = ?call.endpoint)
    )]
    fn api_call(&self, call: ApiCall) -> Result<ApiResponse, KudaError> {
        let method = resolve_verb(call.method);
        let envelope = self.build_envelope(&call, false)?;
        let reply = self.transport.send(envelope.into_request(method))?;

        trace!(status = reply.status, body = %reply.text(), "api call completed");
        normalize(reply.status, &reply.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AsyncKudaClient;
    use crate::core::kernel::TransportError;
    use crate::core::traits::ApiWrapper;
    use crate::core::types::ServiceType;
    use crate::testing::ScriptedTransport;
    use secrecy::Secret;
    use serde_json::json;
    use std::sync::Arc;

    const BODY: &str = r#"{"Status":"successful","Message":"done","Data":{"balance":1000}}"#;

    fn scheme() -> AuthScheme {
        AuthScheme::Kuda {
            email: "dev@example.com".to_string(),
            api_key: Secret::new("key".to_string()),
        }
    }

    fn envelopes() -> EnvelopeBuilder {
        EnvelopeBuilder::new("https://kuda.test/v2.1", "kuda-rs/test")
    }

    fn client(transport: Arc<ScriptedTransport>) -> KudaClient<Arc<ScriptedTransport>> {
        KudaClient::with_transport(transport, envelopes(), scheme())
    }

    #[test]
    fn test_token_fetched_once_and_sent_as_bearer() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, "abc123")
                .reply(200, BODY)
                .reply(200, BODY),
        );
        let client = client(transport.clone());

        client.api_call(ApiCall::new(ServiceType::BankList)).unwrap();
        client.api_call(ApiCall::new(ServiceType::BankList)).unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[0].body,
            Some(json!({"email": "dev@example.com", "apiKey": "key"}))
        );
        assert_eq!(requests[2].header("authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn test_rejected_token_leaves_client_unauthenticated() {
        let transport = Arc::new(ScriptedTransport::new().reply(403, "Forbidden"));
        let client = client(transport.clone());

        let err = client.get_token().unwrap_err();
        assert!(matches!(err, KudaError::Authentication(ref m) if m.contains("Forbidden")));
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_refused_connection_is_connection_error() {
        let transport = Arc::new(
            ScriptedTransport::new().fail(TransportError::Connect("connection refused".to_string())),
        );
        let client = client(transport);

        let err = client.api_call(ApiCall::new(ServiceType::BankList)).unwrap_err();
        assert!(matches!(err, KudaError::Connection(_)));
    }

    #[test]
    fn test_unsupported_verb_sends_nothing() {
        let transport = Arc::new(ScriptedTransport::new());
        let client = client(transport.clone());

        let err = client
            .api_call_with_verb("CONNECT", ApiCall::new(ServiceType::BankList))
            .unwrap_err();
        assert!(matches!(err, KudaError::UnsupportedMethod(_)));
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_clear_token() {
        let transport = Arc::new(ScriptedTransport::new().reply(200, "abc123"));
        let client = client(transport);

        client.get_token().unwrap();
        assert!(client.is_authenticated());
        client.clear_token();
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_blocking_and_async_variants_agree() {
        let script = || {
            Arc::new(
                ScriptedTransport::new()
                    .reply(200, "abc123")
                    .reply(200, BODY),
            )
        };
        let call = ApiCall::new(ServiceType::AdminRetrieveMainAccountBalance).with_reference("ref-1");

        let blocking_transport = script();
        let blocking = client(blocking_transport.clone());
        let from_blocking = blocking.api_call(call.clone()).unwrap();

        let async_transport = script();
        let suspending =
            AsyncKudaClient::with_transport(async_transport.clone(), envelopes(), scheme());
        let from_async = suspending.api_call(call).await.unwrap();

        assert_eq!(from_blocking, from_async);
        assert_eq!(from_async.data, Some(json!({"balance": 1000})));
        assert_eq!(
            blocking_transport.requests()[1],
            async_transport.requests()[1]
        );
    }
}
