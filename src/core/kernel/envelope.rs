use crate::core::kernel::dispatch::ApiCall;
use crate::core::kernel::transport::HttpRequest;
use crate::core::types::ServiceType;
use crate::core::utils::generate_reference;
use reqwest::Method;
use serde_json::{Map, Value};

pub const SERVICE_TYPE_KEY: &str = "servicetype";
pub const REQUEST_REF_KEY: &str = "requestref";
pub const PAYLOAD_KEY: &str = "data";

/// Body of a data-plane call: `{"servicetype"?, "requestref", "data"?}`
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEnvelope {
    pub service_type: ServiceType,
    pub request_reference: String,
    pub payload: Option<Value>,
}

impl RequestEnvelope {
    /// A missing reference is replaced by a freshly generated one.
    pub fn new(
        service_type: ServiceType,
        payload: Option<Value>,
        request_reference: Option<String>,
    ) -> Self {
        Self {
            service_type,
            request_reference: request_reference.unwrap_or_else(generate_reference),
            payload,
        }
    }

    /// Serialize the envelope. The service type is left out for `NoOp` and the
    /// payload key is left out entirely when there is nothing to send.
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        if !self.service_type.is_no_op() {
            body.insert(
                SERVICE_TYPE_KEY.to_string(),
                Value::String(self.service_type.as_str().to_string()),
            );
        }
        body.insert(
            REQUEST_REF_KEY.to_string(),
            Value::String(self.request_reference.clone()),
        );
        if let Some(payload) = self.payload.as_ref().filter(|p| !is_empty_payload(p)) {
            body.insert(PAYLOAD_KEY.to_string(), payload.clone());
        }
        Value::Object(body)
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// The assembled `{url, body, headers}` triple
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub url: String,
    pub body: Value,
    pub headers: Vec<(String, String)>,
}

impl Envelope {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn into_request(self, method: Method) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url,
            headers: self.headers,
            body: Some(self.body),
        }
    }
}

/// Builds URLs, headers and bodies for one API base URL
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    base_url: String,
    user_agent: String,
}

impl EnvelopeBuilder {
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Routing happens server side by service type, so without a suffix every
    /// call goes to the bare base URL.
    pub fn url(&self, endpoint: Option<&str>) -> String {
        match endpoint {
            Some(suffix) => format!("{}{}", self.base_url, suffix),
            None => self.base_url.clone(),
        }
    }

    pub fn base_headers(&self) -> Vec<(String, String)> {
        vec![
            (
                "accept".to_string(),
                "application/json; charset=utf-8".to_string(),
            ),
            ("content-type".to_string(), "application/json".to_string()),
            ("user-agent".to_string(), self.user_agent.clone()),
        ]
    }

    /// Base headers plus `authorization: Bearer <token>` when a token is given
    pub fn headers(&self, token: Option<&str>) -> Vec<(String, String)> {
        let mut headers = self.base_headers();
        if let Some(token) = token {
            headers.push(("authorization".to_string(), format!("Bearer {}", token)));
        }
        headers
    }

    /// Assemble the envelope for `call`. Passing no token builds an
    /// unauthenticated envelope, which only the authentication bootstrap does.
    pub fn build(&self, call: &ApiCall, token: Option<&str>) -> Envelope {
        let envelope = RequestEnvelope::new(
            call.service_type,
            call.payload.clone(),
            call.request_reference.clone(),
        );

        Envelope {
            url: self.url(call.endpoint.as_deref()),
            body: envelope.to_json(),
            headers: self.headers(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder() -> EnvelopeBuilder {
        EnvelopeBuilder::new("https://api.example.com/v2.1", "kuda-rs/0.1.0")
    }

    #[test]
    fn test_payload_key_omitted_when_absent_or_empty() {
        for payload in [None, Some(json!({})), Some(Value::Null), Some(json!([]))] {
            let call = ApiCall {
                payload,
                ..ApiCall::new(ServiceType::BankList)
            };
            let envelope = builder().build(&call, Some("t"));
            let body = envelope.body.as_object().unwrap();
            assert!(!body.contains_key("data"));
            assert!(!body.contains_key("Data"));
            assert_eq!(body["servicetype"], json!("BANK_LIST"));
        }
    }

    #[test]
    fn test_payload_key_present_when_non_empty() {
        let call = ApiCall::new(ServiceType::NameEnquiry)
            .with_payload(json!({"beneficiaryAccountNumber": "0123456789"}));
        let envelope = builder().build(&call, Some("t"));
        assert_eq!(
            envelope.body["data"],
            json!({"beneficiaryAccountNumber": "0123456789"})
        );
    }

    #[test]
    fn test_reference_is_kept_or_generated() {
        let call = ApiCall::new(ServiceType::BankList).with_reference("my-ref");
        let envelope = builder().build(&call, Some("t"));
        assert_eq!(envelope.body["requestref"], json!("my-ref"));

        let first = builder().build(&ApiCall::new(ServiceType::BankList), Some("t"));
        let second = builder().build(&ApiCall::new(ServiceType::BankList), Some("t"));
        assert!(first.body["requestref"].as_str().is_some());
        assert_ne!(first.body["requestref"], second.body["requestref"]);
    }

    #[test]
    fn test_no_op_service_type_is_not_sent() {
        let call = ApiCall::new(ServiceType::NoOp)
            .with_payload(json!({"transactionId": "tx-1"}))
            .with_endpoint("/api/terminal/settlementstatus");
        let envelope = builder().build(&call, Some("t"));
        let body = envelope.body.as_object().unwrap();
        assert!(!body.contains_key("servicetype"));
        assert!(body.contains_key("requestref"));
        assert_eq!(
            envelope.url,
            "https://api.example.com/v2.1/api/terminal/settlementstatus"
        );
    }

    #[test]
    fn test_url_defaults_to_base() {
        let envelope = builder().build(&ApiCall::new(ServiceType::BankList), Some("t"));
        assert_eq!(envelope.url, "https://api.example.com/v2.1");
    }

    #[test]
    fn test_headers_with_and_without_auth() {
        let envelope = builder().build(&ApiCall::new(ServiceType::BankList), Some("abc123"));
        assert_eq!(envelope.header("authorization"), Some("Bearer abc123"));
        assert_eq!(
            envelope.header("accept"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(envelope.header("content-type"), Some("application/json"));
        assert_eq!(envelope.header("user-agent"), Some("kuda-rs/0.1.0"));

        let bootstrap = builder().build(&ApiCall::new(ServiceType::NoOp), None);
        assert_eq!(bootstrap.header("authorization"), None);
        assert_eq!(bootstrap.headers.len(), 3);
    }
}
