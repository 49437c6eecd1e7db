use super::{operation, to_payload};
use crate::core::errors::KudaError;
use crate::core::traits::Operation;
use crate::core::types::ServiceType;
use serde::Serialize;
use serde_json::Value;

/// Open a virtual account under the main account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVirtualAccount {
    pub email: String,
    pub phone_number: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub business_name: String,
    pub tracking_reference: String,
}

operation!(CreateVirtualAccount => AdminCreateVirtualAccount);

/// Change a virtual account's name or email. Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVirtualAccount {
    pub tracking_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Operation for UpdateVirtualAccount {
    fn service_type(&self) -> ServiceType {
        ServiceType::AdminUpdateVirtualAccount
    }

    fn payload(&self) -> Result<Option<Value>, KudaError> {
        to_payload(self)
    }

    fn validate(&self) -> Result<(), KudaError> {
        if self.first_name.is_none() && self.last_name.is_none() && self.email.is_none() {
            return Err(KudaError::InvalidParameters(
                "at least one of first name, last name or email must be updated".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVirtualAccounts {
    pub page_size: u32,
    pub page_number: u32,
}

operation!(ListVirtualAccounts => AdminVirtualAccounts);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVirtualAccount {
    pub tracking_reference: String,
}

operation!(GetVirtualAccount => AdminRetrieveSingleVirtualAccount);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisableVirtualAccount {
    pub tracking_reference: String,
}

operation!(DisableVirtualAccount => AdminDisableVirtualAccount);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnableVirtualAccount {
    pub tracking_reference: String,
}

operation!(EnableVirtualAccount => AdminEnableVirtualAccount);

/// Balance of the main (admin) account
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMainAccountBalance;

operation!(GetMainAccountBalance => AdminRetrieveMainAccountBalance, no_payload);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVirtualAccountBalance {
    pub tracking_reference: String,
}

operation!(GetVirtualAccountBalance => RetrieveVirtualAccountBalance);
