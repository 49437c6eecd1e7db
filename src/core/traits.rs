use crate::core::{
    errors::KudaError,
    kernel::{dispatch::parse_verb, ApiCall, Envelope},
    types::{ApiResponse, HttpMethod, ServiceType},
};
use async_trait::async_trait;
use serde_json::Value;

/// A single banking operation: a service type plus the payload it carries.
pub trait Operation: Send + Sync {
    fn service_type(&self) -> ServiceType;

    /// The `data` object of the envelope; `None` sends no `data` key at all
    fn payload(&self) -> Result<Option<Value>, KudaError>;

    /// Fail-fast checks run before any network activity
    fn validate(&self) -> Result<(), KudaError> {
        Ok(())
    }

    fn method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    /// Path appended to the base URL, for endpoints not routed by service type
    fn endpoint(&self) -> Option<&'static str> {
        None
    }
}

/// Suspending client surface
#[async_trait]
pub trait ApiWrapper: Send + Sync {
    /// Cached bearer token; authenticates on first use
    async fn get_token(&self) -> Result<String, KudaError>;

    /// Assemble url, body and headers for `call`
    async fn build_envelope(&self, call: &ApiCall, exclude_auth: bool)
        -> Result<Envelope, KudaError>;

    async fn api_call(&self, call: ApiCall) -> Result<ApiResponse, KudaError>;

    /// Like [`Self::api_call`] with a verb given as text. An unknown verb is
    /// rejected before a token is fetched or anything is sent.
    async fn api_call_with_verb(&self, verb: &str, call: ApiCall) -> Result<ApiResponse, KudaError> {
        let method = parse_verb(verb)?;
        self.api_call(call.with_method(method)).await
    }

    async fn execute<O>(&self, operation: &O) -> Result<ApiResponse, KudaError>
    where
        O: Operation + ?Sized,
    {
        let call = ApiCall::from_operation(operation)?;
        self.api_call(call).await
    }

    async fn execute_with_reference<O>(
        &self,
        operation: &O,
        request_reference: &str,
    ) -> Result<ApiResponse, KudaError>
    where
        O: Operation + ?Sized,
    {
        let call = ApiCall::from_operation(operation)?.with_reference(request_reference);
        self.api_call(call).await
    }
}

/// Blocking client surface, mirroring [`ApiWrapper`] call for call
pub trait BlockingApiWrapper: Send + Sync {
    fn get_token(&self) -> Result<String, KudaError>;

    fn build_envelope(&self, call: &ApiCall, exclude_auth: bool) -> Result<Envelope, KudaError>;

    fn api_call(&self, call: ApiCall) -> Result<ApiResponse, KudaError>;

    fn api_call_with_verb(&self, verb: &str, call: ApiCall) -> Result<ApiResponse, KudaError> {
        let method = parse_verb(verb)?;
        self.api_call(call.with_method(method))
    }

    fn execute<O>(&self, operation: &O) -> Result<ApiResponse, KudaError>
    where
        O: Operation + ?Sized,
    {
        self.api_call(ApiCall::from_operation(operation)?)
    }

    fn execute_with_reference<O>(
        &self,
        operation: &O,
        request_reference: &str,
    ) -> Result<ApiResponse, KudaError>
    where
        O: Operation + ?Sized,
    {
        self.api_call(ApiCall::from_operation(operation)?.with_reference(request_reference))
    }
}
