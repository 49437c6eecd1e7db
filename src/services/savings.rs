//! Plain, open flexible and fixed savings.
//!
//! Plain savings allow deposits and withdrawals at any time. Open flexible
//! savings collect a scheduled amount and can be withdrawn from early. Fixed
//! savings lock funds until maturity.

use super::operation;
use crate::core::types::TransactionType;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlainSavings {
    pub name: String,
    pub tracking_reference: String,
}

operation!(CreatePlainSavings => CreatePlainSave);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlainSavings {
    pub tracking_reference: String,
    pub primary_account_number: String,
}

operation!(GetPlainSavings => GetPlainSave);

/// Every plain savings account owned by a customer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPlainSavings {
    pub tracking_reference: String,
}

operation!(ListPlainSavings => GetAllCustomerPlainSave);

/// Deposit into (`Credit`) or withdraw from (`Debit`) a plain savings account
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreditOrDebitPlainSavings {
    pub amount: i64,
    pub narration: String,
    pub transaction_type: TransactionType,
    pub tracking_reference: String,
}

operation!(CreditOrDebitPlainSavings => PlainSaveDebitCredit);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPlainSavingsTransactions {
    pub page_size: u32,
    pub page_number: u32,
    pub tracking_reference: String,
}

operation!(GetPlainSavingsTransactions => RetrievePlainSaveTransactions);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOpenFlexibleSavings {
    pub savings_tracking_reference: String,
    pub name: String,
    pub virtual_account_tracking_reference: String,
    pub amount: i64,
    pub duration: String,
    pub frequency: String,
    pub start_now: bool,
    pub start_date: String,
}

operation!(CreateOpenFlexibleSavings => CreateOpenFlexibleSave);

/// Quote an open flexible plan (interest, schedule) without creating it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreCreateOpenFlexibleSavings {
    pub savings_tracking_reference: String,
    pub name: String,
    pub virtual_account_tracking_reference: String,
    pub amount: i64,
    pub duration: String,
    pub frequency: String,
    pub start_now: bool,
    pub start_date: String,
    pub is_interest_earning: bool,
}

operation!(PreCreateOpenFlexibleSavings => PreCreateOpenFlexibleSave);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpenFlexibleSavings {
    pub tracking_reference: String,
    pub primary_account_number: String,
}

operation!(GetOpenFlexibleSavings => GetOpenFlexibleSave);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOpenFlexibleSavings {
    pub tracking_reference: String,
    pub primary_account_number: String,
}

operation!(ListOpenFlexibleSavings => GetAllCustomerOpenFlexibleSave);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawOpenFlexibleSavings {
    pub amount: i64,
    pub tracking_reference: String,
}

operation!(WithdrawOpenFlexibleSavings => CompleteOpenFlexibleSaveWithdrawal);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOpenFlexibleSavingsTransactions {
    pub page_size: u32,
    pub page_number: u32,
    pub tracking_reference: String,
}

operation!(GetOpenFlexibleSavingsTransactions => RetrieveOpenFlexibleSaveTransactions);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFixedSavings {
    pub savings_tracking_reference: String,
    pub name: String,
    pub virtual_account_tracking_reference: String,
    pub amount: i64,
    pub duration: String,
    pub frequency: String,
    pub start_now: bool,
    pub start_date: String,
    pub is_interest_earning: bool,
}

operation!(CreateFixedSavings => CreateFixedSave);

/// Fixed savings are addressed by savings id rather than tracking reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFixedSavings {
    pub savings_id: String,
}

operation!(GetFixedSavings => GetFixedSave);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFixedSavings {
    pub tracking_reference: String,
}

operation!(ListFixedSavings => GetAllCustomerFixedSave);

/// Break a fixed plan and pay out `amount`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloseFixedSavings {
    pub amount: i64,
    pub savings_id: String,
}

operation!(CloseFixedSavings => CompleteFixedSaveWithdrawal);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetFixedSavingsTransactions {
    pub page_number: u32,
    pub page_size: u32,
    pub savings_id: String,
}

operation!(GetFixedSavingsTransactions => RetrieveFixedSaveTransactions);
