use crate::core::errors::KudaError;
use crate::core::traits::Operation;
use crate::core::types::{HttpMethod, ServiceType};
use reqwest::Method;
use serde_json::Value;

/// Everything the dispatcher needs to know about one call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub service_type: ServiceType,
    pub payload: Option<Value>,
    pub method: HttpMethod,
    /// Appended to the base URL; `None` posts to the base URL itself
    pub endpoint: Option<String>,
    /// Idempotency reference; generated when `None`
    pub request_reference: Option<String>,
}

impl ApiCall {
    pub fn new(service_type: ServiceType) -> Self {
        Self {
            service_type,
            payload: None,
            method: HttpMethod::Post,
            endpoint: None,
            request_reference: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.request_reference = Some(reference.into());
        self
    }

    /// Validate `operation` and turn it into a call. Validation failures are
    /// returned before anything touches the network.
    pub fn from_operation<O: Operation + ?Sized>(operation: &O) -> Result<Self, KudaError> {
        operation.validate()?;
        Ok(Self {
            service_type: operation.service_type(),
            payload: operation.payload()?,
            method: operation.method(),
            endpoint: operation.endpoint().map(str::to_string),
            request_reference: None,
        })
    }
}

/// Closed mapping from the verb enumeration to the transport's methods
pub fn resolve_verb(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Options => Method::OPTIONS,
        HttpMethod::Head => Method::HEAD,
    }
}

/// Parse a caller supplied verb, rejecting anything outside the closed set
pub fn parse_verb(verb: &str) -> Result<HttpMethod, KudaError> {
    verb.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Probe {
        valid: bool,
    }

    impl Operation for Probe {
        fn service_type(&self) -> ServiceType {
            ServiceType::BankList
        }

        fn payload(&self) -> Result<Option<Value>, KudaError> {
            Ok(Some(json!({"probe": true})))
        }

        fn validate(&self) -> Result<(), KudaError> {
            if self.valid {
                Ok(())
            } else {
                Err(KudaError::InvalidParameters("probe is invalid".to_string()))
            }
        }
    }

    #[test]
    fn test_every_verb_resolves() {
        assert_eq!(resolve_verb(HttpMethod::Get), Method::GET);
        assert_eq!(resolve_verb(HttpMethod::Post), Method::POST);
        assert_eq!(resolve_verb(HttpMethod::Put), Method::PUT);
        assert_eq!(resolve_verb(HttpMethod::Patch), Method::PATCH);
        assert_eq!(resolve_verb(HttpMethod::Delete), Method::DELETE);
        assert_eq!(resolve_verb(HttpMethod::Options), Method::OPTIONS);
        assert_eq!(resolve_verb(HttpMethod::Head), Method::HEAD);
    }

    #[test]
    fn test_unknown_verb_is_rejected() {
        assert!(matches!(
            parse_verb("CONNECT"),
            Err(KudaError::UnsupportedMethod(_))
        ));
        assert_eq!(parse_verb("patch").unwrap(), HttpMethod::Patch);
    }

    #[test]
    fn test_call_defaults_to_post_on_base_url() {
        let call = ApiCall::new(ServiceType::BankList);
        assert_eq!(call.method, HttpMethod::Post);
        assert!(call.endpoint.is_none());
        assert!(call.payload.is_none());
        assert!(call.request_reference.is_none());
    }

    #[test]
    fn test_from_operation_validates_first() {
        let call = ApiCall::from_operation(&Probe { valid: true }).unwrap();
        assert_eq!(call.service_type, ServiceType::BankList);
        assert_eq!(call.payload, Some(json!({"probe": true})));

        let err = ApiCall::from_operation(&Probe { valid: false }).unwrap_err();
        assert!(matches!(err, KudaError::InvalidParameters(_)));
    }
}
