use crate::client::{AsyncKudaClient, KudaClient};
use crate::core::config::{KudaConfig, Mode, SettlementConfig, TransportConfig};
use crate::core::errors::KudaError;
use crate::core::kernel::{
    AuthScheme, EnvelopeBuilder, ReqwestBlockingTransport, ReqwestTransport,
};

/// Builder for Kuda clients
///
/// Collects transport settings and optional mode / base URL overrides, then
/// builds either client variant for the core API or the partner settlement API.
#[derive(Debug, Default)]
pub struct KudaBuilder {
    transport: TransportConfig,
    mode: Option<Mode>,
    base_url: Option<String>,
}

impl KudaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the mode carried by the credentials
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Point the client at a different host (sandboxes, mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.transport = self.transport.with_timeout(timeout_seconds);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport = self.transport.with_user_agent(user_agent.into());
        self
    }

    pub fn with_transport_config(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub fn build_async(self, config: KudaConfig) -> Result<AsyncKudaClient, KudaError> {
        let (envelopes, auth) = self.core_parts(config)?;
        let transport = ReqwestTransport::new(self.transport)?;
        Ok(AsyncKudaClient::with_transport(transport, envelopes, auth))
    }

    /// Must be called outside of an async runtime
    pub fn build_blocking(self, config: KudaConfig) -> Result<KudaClient, KudaError> {
        let (envelopes, auth) = self.core_parts(config)?;
        let transport = ReqwestBlockingTransport::new(self.transport)?;
        Ok(KudaClient::with_transport(transport, envelopes, auth))
    }

    pub fn build_settlement_async(
        self,
        config: SettlementConfig,
    ) -> Result<AsyncKudaClient, KudaError> {
        let (envelopes, auth) = self.settlement_parts(config);
        let transport = ReqwestTransport::new(self.transport)?;
        Ok(AsyncKudaClient::with_transport(transport, envelopes, auth))
    }

    pub fn build_settlement_blocking(
        self,
        config: SettlementConfig,
    ) -> Result<KudaClient, KudaError> {
        let (envelopes, auth) = self.settlement_parts(config);
        let transport = ReqwestBlockingTransport::new(self.transport)?;
        Ok(KudaClient::with_transport(transport, envelopes, auth))
    }

    fn core_parts(&self, mut config: KudaConfig) -> Result<(EnvelopeBuilder, AuthScheme), KudaError> {
        if !config.has_credentials() {
            return Err(KudaError::InvalidParameters(
                "email and api key are required".to_string(),
            ));
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(base_url) = self.base_url.clone() {
            config.base_url = Some(base_url);
        }

        let envelopes =
            EnvelopeBuilder::new(config.effective_base_url(), self.transport.user_agent.clone());
        Ok((envelopes, AuthScheme::from(&config)))
    }

    fn settlement_parts(&self, mut config: SettlementConfig) -> (EnvelopeBuilder, AuthScheme) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(base_url) = self.base_url.clone() {
            config.base_url = Some(base_url);
        }

        let envelopes =
            EnvelopeBuilder::new(config.effective_base_url(), self.transport.user_agent.clone());
        (envelopes, AuthScheme::from(&config))
    }
}
