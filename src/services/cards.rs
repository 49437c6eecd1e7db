use super::operation;
use crate::core::types::{CardChannel, Gender};
use serde::Serialize;

/// Order a physical debit card for a virtual account holder
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestCard {
    pub tracking_reference: String,
    pub name_on_card: String,
    #[serde(rename = "DateofBirth")]
    pub date_of_birth: String,
    pub gender: Gender,
    pub delivery_state: String,
    pub delivery_street_no_and_name: String,
    pub delivery_city: String,
    #[serde(rename = "DeliveryLGA")]
    pub delivery_lga: String,
    pub delivery_landmark: String,
    pub country: String,
    pub additional_phone_number: String,
}

operation!(RequestCard => RequestCard);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCards {
    pub tracking_reference: String,
    pub simulate_request: bool,
}

operation!(GetCards => GetCustomerCards);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivateCard {
    pub pan: String,
    #[serde(rename = "CVV")]
    pub cvv: String,
    pub id: i64,
    pub tracking_reference: String,
    pub simulate_request: bool,
}

operation!(ActivateCard => ActivateCard);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeactivateCard {
    pub id: i64,
    pub tracking_reference: String,
    pub simulate_request: bool,
}

operation!(DeactivateCard => DeactivateCard);

/// Cap spending on one channel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetCardLimit {
    pub id: i64,
    pub tracking_reference: String,
    pub channel: CardChannel,
    pub limit: i64,
    pub simulate_request: bool,
}

operation!(SetCardLimit => ManageCardTransactionLimit);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManageCardChannel {
    pub id: i64,
    pub tracking_reference: String,
    pub channel: CardChannel,
    pub limit: i64,
    pub simulate_request: bool,
}

operation!(ManageCardChannel => ManageCardChannel);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeCardPin {
    pub id: i64,
    pub tracking_reference: String,
    #[serde(rename = "NewPIN")]
    pub new_pin: String,
}

operation!(ChangeCardPin => ChangeCardPin);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockCard {
    pub id: i64,
    pub tracking_reference: String,
}

operation!(BlockCard => BlockCard);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnblockCard {
    pub id: i64,
    pub tracking_reference: String,
}

operation!(UnblockCard => UnblockCard);
