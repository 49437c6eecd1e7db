//! Partner API for POS terminals and instant settlement.
//!
//! These calls are routed by path, not by service type, and must be executed on
//! a client built with a `SettlementConfig`.

use super::operation;
use serde::Serialize;

/// Register a POS device with its merchant and payout account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTerminal {
    pub terminal_id: String,
    pub merchant_id: String,
    pub kuda_account_number: String,
    pub serial_number: String,
    pub is_receiving_payment: bool,
    pub is_active: bool,
}

// The doubled prefix is the route the partner API actually serves.
operation!(CreateTerminal => endpoint "/api/terminal/api/terminal/createterminal");

/// Move a terminal to another merchant or payout account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTerminal {
    pub id: i64,
    pub kuda_merchant_id: String,
    pub terminal_id: String,
    pub kuda_account_number: String,
    pub kuda_account_name: String,
    pub serial_number: String,
    pub is_active: bool,
    pub is_receiving_payment: bool,
    pub fee_percentage: f64,
    pub date_created: String,
}

operation!(UpdateTerminal => endpoint "/api/terminal/EditTerminal");

/// Merchants and the terminals assigned to them
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTerminals {
    pub page_size: u32,
    pub page_number: u32,
}

operation!(ListTerminals => endpoint "/RetrieveMerchantTerminals");

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSettlementStatus {
    pub transaction_id: String,
}

operation!(GetSettlementStatus => endpoint "/api/terminal/settlementstatus");

/// Record a completed card transaction for settlement
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogTransaction {
    pub amount: i64,
    pub transaction_id: String,
    pub terminal_id: String,
}

operation!(LogTransaction => endpoint "/api/terminal/logtransaction");

/// Back-office search over a terminal's transactions, for disputes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTransactions {
    pub terminal_id: String,
    pub date_from: String,
    pub date_to: String,
    pub page_size: u32,
    pub page_number: u32,
}

operation!(SearchTransactions => endpoint "/api/terminal/searchtransaction");
