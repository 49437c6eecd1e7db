use super::operation;
use crate::core::types::{TransactionStatus, TransferInstruction};
use serde::Serialize;

/// All banks reachable for transfers
#[derive(Debug, Clone, Copy, Default)]
pub struct GetBanks;

operation!(GetBanks => BankList, no_payload);

/// Name enquiry: confirm who owns an account before sending money
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmTransferRecipient {
    pub beneficiary_account_number: String,
    pub beneficiary_bank_code: String,
    #[serde(rename = "SenderTrackingReference", skip_serializing_if = "Option::is_none")]
    pub sender_tracking_reference: Option<String>,
    pub is_request_from_virtual_account: bool,
}

operation!(ConfirmTransferRecipient => NameEnquiry);

/// Transfer from the main account. Amounts are in kobo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundTransfer {
    #[serde(rename = "ClientAccountNumber", skip_serializing_if = "Option::is_none")]
    pub client_account_number: Option<String>,
    #[serde(rename = "beneficiarybankCode")]
    pub beneficiary_bank_code: String,
    pub beneficiary_account: String,
    pub beneficiary_name: String,
    pub amount: i64,
    pub narration: String,
    #[serde(rename = "nameEnquirySessionID")]
    pub name_enquiry_session_id: String,
    pub tracking_reference: String,
    pub sender_name: String,
    pub client_fee_charge: i64,
}

operation!(FundTransfer => SingleFundTransfer);

/// Transfer out of a virtual account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccountFundTransfer {
    pub tracking_reference: String,
    pub beneficiary_account: String,
    pub amount: i64,
    pub narration: String,
    pub beneficiary_bank_code: String,
    pub beneficiary_name: String,
    pub sender_name: String,
    pub name_enquiry_id: String,
    pub client_fee_charge: i64,
    #[serde(rename = "ClientAccountNumber", skip_serializing_if = "Option::is_none")]
    pub client_account_number: Option<String>,
}

operation!(VirtualAccountFundTransfer => VirtualAccountFundTransfer);

/// Queue a batch of transfers for later processing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessTransfers {
    pub fund_transfer_instructions: Vec<TransferInstruction>,
}

operation!(ProcessTransfers => FundTransferInstruction);

/// Search queued transfer instructions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTransferInstructions {
    pub account_number: String,
    pub reference: String,
    pub amount: i64,
    pub original_request_ref: String,
    pub status: TransactionStatus,
    pub page_number: u32,
    pub page_size: u32,
}

operation!(GetTransferInstructions => SearchFundTransferInstruction);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetTransactionLogs {
    pub request_reference: String,
    pub response_reference: String,
    pub fetch_successful_records: bool,
    pub transaction_date: String,
    pub has_transaction_date_range_filter: bool,
    pub start_date: String,
    pub end_date: String,
    pub page_size: u32,
    pub page_number: u32,
}

operation!(GetTransactionLogs => RetrieveTransactionLogs);

/// Main account history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionHistory {
    pub page_size: u32,
    pub page_number: u32,
}

operation!(GetTransactionHistory => AdminMainAccountTransactions);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFilteredTransactionHistory {
    pub page_size: u32,
    pub page_number: u32,
    pub start_date: String,
    pub end_date: String,
}

operation!(GetFilteredTransactionHistory => AdminMainAccountFilteredTransactions);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVirtualAccountTransactionHistory {
    pub tracking_reference: String,
    pub page_size: u32,
    pub page_number: u32,
}

operation!(GetVirtualAccountTransactionHistory => AdminVirtualAccountTransactions);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVirtualAccountFilteredTransactionHistory {
    pub tracking_reference: String,
    pub page_size: u32,
    pub page_number: u32,
    pub start_date: String,
    pub end_date: String,
}

operation!(GetVirtualAccountFilteredTransactionHistory => AdminVirtualAccountFilteredTransactions);

/// Status of an earlier transfer, looked up by its request reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransferStatus {
    pub is_third_party_bank_transfer: bool,
    pub transaction_request_reference: String,
}

operation!(GetTransferStatus => TransactionStatusQuery);

/// Move money from the main account into a virtual account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundVirtualAccount {
    pub tracking_reference: String,
    pub amount: i64,
    pub narration: String,
}

operation!(FundVirtualAccount => FundVirtualAccount);

/// Move money from a virtual account back to the main account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawFromVirtualAccount {
    pub tracking_reference: String,
    pub amount: i64,
    pub narration: String,
    #[serde(rename = "ClientFeeCharge")]
    pub client_fee_charge: i64,
}

operation!(WithdrawFromVirtualAccount => WithdrawVirtualAccount);
