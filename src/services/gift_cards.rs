use super::operation;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct GetGiftCards;

operation!(GetGiftCards => GetGiftCard, no_payload);

/// Buy a gift card from the main account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseGiftCard {
    pub amount: i64,
    pub requesting_customer_name: String,
    pub requesting_customer_mobile: String,
    pub requesting_customer_email: String,
    pub biller_identifier: String,
    pub note: String,
}

operation!(PurchaseGiftCard => AdminBuyGiftCard);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseGiftCardFromVirtualAccount {
    pub tracking_reference: String,
    pub amount: i64,
    pub requesting_customer_name: String,
    pub requesting_customer_mobile: String,
    pub requesting_customer_email: String,
    pub biller_identifier: String,
    pub note: String,
}

operation!(PurchaseGiftCardFromVirtualAccount => BuyGiftCard);

/// Status of a gift card purchase, keyed by the original purchase details
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetGiftCardStatus {
    pub tracking_reference: String,
    pub amount: i64,
    pub requesting_customer_name: String,
    pub requesting_customer_mobile: String,
    pub requesting_customer_email: String,
    pub biller_identifier: String,
    pub note: String,
}

operation!(GetGiftCardStatus => GiftCardTsq);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::ApiCall;
    use crate::core::types::ServiceType;
    use serde_json::json;

    #[test]
    fn test_catalogue_has_no_payload() {
        let call = ApiCall::from_operation(&GetGiftCards).unwrap();
        assert_eq!(call.service_type, ServiceType::GetGiftCard);
        assert!(call.payload.is_none());
    }

    #[test]
    fn test_purchase_keys() {
        let call = ApiCall::from_operation(&PurchaseGiftCard {
            amount: 5_000,
            requesting_customer_name: "Ada".to_string(),
            requesting_customer_mobile: "08012345678".to_string(),
            requesting_customer_email: "ada@example.com".to_string(),
            biller_identifier: "AMAZON".to_string(),
            note: "birthday".to_string(),
        })
        .unwrap();
        assert_eq!(
            call.payload,
            Some(json!({
                "amount": 5_000,
                "requestingCustomerName": "Ada",
                "requestingCustomerMobile": "08012345678",
                "requestingCustomerEmail": "ada@example.com",
                "billerIdentifier": "AMAZON",
                "note": "birthday",
            }))
        );
    }
}
