//! Kuda kernel - request/response plumbing shared by every client
//!
//! Every banking operation, blocking or not, goes through the same four steps:
//!
//! 1. **Token**: `token` obtains a bearer token once per client and caches it
//!    (`TokenCell` for the suspending client, `BlockingTokenCell` for the
//!    blocking one). `AuthScheme` decides how the token is fetched.
//! 2. **Envelope**: `envelope` assembles `{url, body, headers}`. The body is
//!    `{"servicetype"?, "requestref", "data"?}`; the service type is dropped for
//!    `ServiceType::NoOp` and `data` is dropped when the payload is empty.
//! 3. **Dispatch**: `dispatch` resolves the verb through a closed mapping and
//!    the `transport` sends the request. Refused connections and timeouts both
//!    surface as `KudaError::Connection`; nothing is retried.
//! 4. **Normalize**: `normalize` parses the body and extracts
//!    `Status`/`status`, `Message`/`message`, `Data`/`data`, capitalized first.
//!
//! # Example
//! ```rust,no_run
//! use kuda::core::kernel::{ApiCall, EnvelopeBuilder};
//! use kuda::core::types::ServiceType;
//! use serde_json::json;
//!
//! let envelopes = EnvelopeBuilder::new("https://kuda-openapi.kuda.com/v2.1", "kuda-rs/0.1.0");
//! let call = ApiCall::new(ServiceType::NameEnquiry)
//!     .with_payload(json!({"beneficiaryAccountNumber": "1100000000"}));
//! let envelope = envelopes.build(&call, Some("bearer-token"));
//! assert_eq!(envelope.header("authorization"), Some("Bearer bearer-token"));
//! ```

pub mod dispatch;
pub mod envelope;
pub mod normalize;
pub mod token;
pub mod transport;

// Re-export key types for convenience
pub use dispatch::{parse_verb, resolve_verb, ApiCall};
pub use envelope::{Envelope, EnvelopeBuilder, RequestEnvelope};
pub use normalize::normalize;
pub use token::{AuthScheme, BlockingTokenCell, TokenCell};
pub use transport::{
    BlockingTransport, HttpReply, HttpRequest, ReqwestBlockingTransport, ReqwestTransport,
    Transport, TransportError,
};
