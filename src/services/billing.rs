use super::{operation, to_payload};
use crate::core::errors::KudaError;
use crate::core::traits::Operation;
use crate::core::types::{BillType, ServiceType};
use serde::Serialize;
use serde_json::Value;

/// Billers offering a given kind of bill
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBillers {
    pub bill_type_name: BillType,
}

operation!(GetBillers => GetBillersByType);

/// Check the customer identifier (meter number, smart card, phone) before paying
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyBillCustomer {
    pub tracking_ref: String,
    pub kuda_bill_item_identifier: String,
    pub customer_identification: String,
}

operation!(VerifyBillCustomer => VerifyBillCustomer);

/// Pay a bill from the main account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseBill {
    pub amount: i64,
    pub bill_item_identifier: String,
    pub phone_number: String,
    pub customer_identifier: String,
}

operation!(PurchaseBill => AdminPurchaseBill);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseBillFromVirtualAccount {
    pub amount: i64,
    pub bill_item_identifier: String,
    pub phone_number: String,
    pub customer_identifier: String,
    pub tracking_reference: String,
}

operation!(PurchaseBillFromVirtualAccount => PurchaseBill);

/// Status of a bill purchase. Exactly one of the two references must be set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetBillPurchaseStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_response_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_request_ref: Option<String>,
}

impl GetBillPurchaseStatus {
    pub fn by_response_reference(reference: impl Into<String>) -> Self {
        Self {
            bill_response_reference: Some(reference.into()),
            bill_request_ref: None,
        }
    }

    pub fn by_request_reference(reference: impl Into<String>) -> Self {
        Self {
            bill_response_reference: None,
            bill_request_ref: Some(reference.into()),
        }
    }
}

impl Operation for GetBillPurchaseStatus {
    fn service_type(&self) -> ServiceType {
        ServiceType::BillTsq
    }

    fn payload(&self) -> Result<Option<Value>, KudaError> {
        to_payload(self)
    }

    fn validate(&self) -> Result<(), KudaError> {
        match (&self.bill_response_reference, &self.bill_request_ref) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(KudaError::InvalidParameters(
                "exactly one of bill response reference or bill request reference is required"
                    .to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetPurchasedBills;

operation!(GetPurchasedBills => AdminGetPurchasedBills, no_payload);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPurchasedBillsFromVirtualAccount {
    pub tracking_reference: String,
}

operation!(GetPurchasedBillsFromVirtualAccount => GetPurchasedBills);
