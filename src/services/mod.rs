//! Typed banking operations.
//!
//! Each operation is a plain struct implementing
//! [`Operation`](crate::core::traits::Operation); run it with `execute` on
//! either client. Field names follow Rust conventions while the serialized keys
//! match the server's exact casing.

use crate::core::errors::KudaError;
use serde::Serialize;
use serde_json::Value;

/// Serialize an operation into the envelope's `data` object
pub(crate) fn to_payload<T: Serialize + ?Sized>(value: &T) -> Result<Option<Value>, KudaError> {
    serde_json::to_value(value)
        .map(Some)
        .map_err(|e| KudaError::InvalidParameters(format!("Failed to serialize payload: {}", e)))
}

/// Implements `Operation` for a payload struct.
///
/// - `Type => Variant`: service-routed call, the struct itself is the payload
/// - `Type => Variant, no_payload`: service-routed call without `data`
/// - `Type => endpoint "/path"`: partner call routed by path only
macro_rules! operation {
    ($ty:ty => $service:ident) => {
        impl $crate::core::traits::Operation for $ty {
            fn service_type(&self) -> $crate::core::types::ServiceType {
                $crate::core::types::ServiceType::$service
            }

            fn payload(
                &self,
            ) -> Result<Option<serde_json::Value>, $crate::core::errors::KudaError> {
                $crate::services::to_payload(self)
            }
        }
    };
    ($ty:ty => $service:ident, no_payload) => {
        impl $crate::core::traits::Operation for $ty {
            fn service_type(&self) -> $crate::core::types::ServiceType {
                $crate::core::types::ServiceType::$service
            }

            fn payload(
                &self,
            ) -> Result<Option<serde_json::Value>, $crate::core::errors::KudaError> {
                Ok(None)
            }
        }
    };
    ($ty:ty => endpoint $path:literal) => {
        impl $crate::core::traits::Operation for $ty {
            fn service_type(&self) -> $crate::core::types::ServiceType {
                $crate::core::types::ServiceType::NoOp
            }

            fn payload(
                &self,
            ) -> Result<Option<serde_json::Value>, $crate::core::errors::KudaError> {
                $crate::services::to_payload(self)
            }

            fn endpoint(&self) -> Option<&'static str> {
                Some($path)
            }
        }
    };
}

pub(crate) use operation;

pub mod accounts;
pub mod billing;
pub mod cards;
pub mod gift_cards;
pub mod savings;
pub mod settlement;
pub mod transactions;
