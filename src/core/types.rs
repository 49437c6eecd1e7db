use crate::core::errors::KudaError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Uniform result of every API call, whatever shape the server answered with.
///
/// `status`, `message` and `data` are extracted from the body when present;
/// `raw` always holds the full parsed body so nothing is lost when an endpoint
/// does not follow the usual `{status, message, data}` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status_code: u16,
    pub status: Option<String>,
    pub message: Option<String>,
    pub data: Option<Value>,
    pub raw: Value,
}

impl ApiResponse {
    pub const fn is_http_success(&self) -> bool {
        self.status_code >= 200 && self.status_code < 300
    }
}

/// HTTP verbs accepted by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = KudaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            "HEAD" => Ok(Self::Head),
            _ => Err(KudaError::UnsupportedMethod(format!(
                "{} is not a supported HTTP method",
                s
            ))),
        }
    }
}

macro_rules! service_types {
    ($($(#[$doc:meta])* $variant:ident => $wire:literal,)+) => {
        /// Operation identifiers understood by the single-endpoint banking API
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ServiceType {
            $($(#[$doc])* $variant,)+
        }

        impl ServiceType {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }
    };
}

service_types! {
    AdminCreateVirtualAccount => "ADMIN_CREATE_VIRTUAL_ACCOUNT",
    AdminVirtualAccounts => "ADMIN_VIRTUAL_ACCOUNTS",
    AdminUpdateVirtualAccount => "ADMIN_UPDATE_VIRTUAL_ACCOUNT",
    AdminDisableVirtualAccount => "ADMIN_DISABLE_VIRTUAL_ACCOUNT",
    AdminEnableVirtualAccount => "ADMIN_ENABLE_VIRTUAL_ACCOUNT",
    AdminRetrieveMainAccountBalance => "ADMIN_RETRIEVE_MAIN_ACCOUNT_BALANCE",
    AdminRetrieveSingleVirtualAccount => "ADMIN_RETRIEVE_SINGLE_VIRTUAL_ACCOUNT",
    RetrieveSingleVirtualAccount => "RETRIEVE_SINGLE_VIRTUAL_ACCOUNT",
    BankList => "BANK_LIST",
    NameEnquiry => "NAME_ENQUIRY",
    SingleFundTransfer => "SINGLE_FUND_TRANSFER",
    VirtualAccountFundTransfer => "VIRTUAL_ACCOUNT_FUND_TRANSFER",
    TransactionStatusQuery => "TRANSACTION_STATUS_QUERY",
    RetrieveVirtualAccountBalance => "RETRIEVE_VIRTUAL_ACCOUNT_BALANCE",
    AdminMainAccountTransactions => "ADMIN_MAIN_ACCOUNT_TRANSACTIONS",
    AdminMainAccountFilteredTransactions => "ADMIN_MAIN_ACCOUNT_FILTERED_TRANSACTIONS",
    AdminVirtualAccountTransactions => "ADMIN_VIRTUAL_ACCOUNT_TRANSACTIONS",
    AdminVirtualAccountFilteredTransactions => "ADMIN_VIRTUAL_ACCOUNT_FILTERED_TRANSACTIONS",
    FundVirtualAccount => "FUND_VIRTUAL_ACCOUNT",
    WithdrawVirtualAccount => "WITHDRAW_VIRTUAL_ACCOUNT",
    UpdateVirtualAccountLimit => "UPDATE_VIRTUAL_ACCOUNT_LIMIT",
    FundTransferInstruction => "FUND_TRANSFER_INSTRUCTION",
    SearchFundTransferInstruction => "SEARCH_FUND_TRANSFER_INSTRUCTION",
    RetrieveTransactionLogs => "RETRIEVE_TRANSACTION_LOGS",
    GetGiftCard => "GET_GIFT_CARD",
    AdminBuyGiftCard => "ADMIN_BUY_GIFT_CARD",
    BuyGiftCard => "BUY_GIFT_CARD",
    GiftCardTsq => "GIFT_CARD_TSQ",
    CreatePlainSave => "CREATE_PLAIN_SAVE",
    GetPlainSave => "GET_PLAIN_SAVE",
    GetAllCustomerPlainSave => "GET_ALL_CUSTOMER_PLAIN_SAVE",
    PlainSaveDebitCredit => "PLAIN_SAVE_DEBIT_CREDIT",
    RetrievePlainSaveTransactions => "RETRIEVE_PLAIN_SAVE_TRANSACTIONS",
    CreateOpenFlexibleSave => "CREATE_OPEN_FLEXIBLE_SAVE",
    PreCreateOpenFlexibleSave => "PRE_CREATE_OPEN_FLEXIBLE_SAVE",
    GetOpenFlexibleSave => "GET_OPEN_FLEXIBLE_SAVE",
    GetAllCustomerOpenFlexibleSave => "GET_ALL_CUSTOMER_OPEN_FLEXIBLE_SAVE",
    CompleteOpenFlexibleSaveWithdrawal => "COMPLETE_OPEN_FLEXIBLE_SAVE_WITHDRAWAL",
    RetrieveOpenFlexibleSaveTransactions => "RETRIEVE_OPEN_FLEXIBLE_SAVE_TRANSACTIONS",
    CreateFixedSave => "CREATE_FIXED_SAVE",
    GetFixedSave => "GET_FIXED_SAVE",
    GetAllCustomerFixedSave => "GET_ALL_CUSTOMER_FIXED_SAVE",
    CompleteFixedSaveWithdrawal => "COMPLETE_FIXED_SAVE_WITHDRAWAL",
    RetrieveFixedSaveTransactions => "RETRIEVE_FIXED_SAVE_TRANSACTIONS",
    RequestCard => "REQUEST_CARD",
    GetCustomerCards => "GET_CUSTOMER_CARDS",
    ActivateCard => "ACTIVATE_CARD",
    DeactivateCard => "DEACTIVATE_CARD",
    ManageCardTransactionLimit => "MANAGE_CARD_TRANSACTION_LIMIT",
    ManageCardChannel => "MANAGE_CARD_CHANNEL",
    ChangeCardPin => "CHANGE_CARD_PIN",
    BlockCard => "BLOCK_CARD",
    UnblockCard => "UNBLOCK_CARD",
    GetBillersByType => "GET_BILLERS_BY_TYPE",
    VerifyBillCustomer => "VERIFY_BILL_CUSTOMER",
    AdminPurchaseBill => "ADMIN_PURCHASE_BILL",
    PurchaseBill => "PURCHASE_BILL",
    BillTsq => "BILL_TSQ",
    AdminGetPurchasedBills => "ADMIN_GET_PURCHASED_BILLS",
    GetPurchasedBills => "GET_PURCHASED_BILLS",
    /// Sentinel for endpoints without a service type; never sent on the wire.
    NoOp => "NO_OP",
}

impl ServiceType {
    pub const fn is_no_op(self) -> bool {
        matches!(self, Self::NoOp)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Customer gender, sent as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male = 1,
    Female = 2,
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Where a card may be used, sent as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardChannel {
    Atm = 1,
    Pos = 2,
    Web = 3,
}

impl Serialize for CardChannel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Pending,
    Processing,
    Successful,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "c")]
    Credit,
    #[serde(rename = "d")]
    Debit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillType {
    #[serde(rename = "airtime")]
    Airtime,
    #[serde(rename = "betting")]
    Betting,
    #[serde(rename = "internet_data")]
    InternetData,
    #[serde(rename = "electricity")]
    Electricity,
    #[serde(rename = "cableTv")]
    CableTv,
}

/// One entry of a bulk transfer instruction. Amounts are in kobo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransferInstruction {
    pub account_number: String,
    pub account_name: String,
    pub beneficiary_bank_code: String,
    pub amount: i64,
    pub bank_code: String,
    pub narration: String,
    pub bank_name: String,
    pub long_code: String,
    pub reference: String,
}
