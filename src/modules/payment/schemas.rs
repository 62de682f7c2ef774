use paperclip::actix::Apiv2Schema;
use validator::Validate;

use crate::types::query_params::ActionOutcome;
use crate::{backend, types, wallet};

// *** Requests ***

#[derive(
    Validate, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema,
)]
pub struct ActionRequest {
    /// Opaque request identifier minted by the backend; the whole action link
    /// is a bearer-style URL around it.
    #[validate(length(min = 1))]
    pub uuid: String,
}

#[derive(
    Validate, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema,
)]
pub struct CreatePaymentRequest {
    #[validate(length(min = 1))]
    pub project_id: String,
    #[validate(custom = "crate::errors::validate_account_id")]
    pub receiver_id: types::AccountId,
    /// Human-readable decimal amount, e.g. `"2.5"`. Converted to base units
    /// before the request is stored.
    #[validate(length(min = 1))]
    pub amount: String,
    /// Token contract for fungible-token payments; leave empty to pay in
    /// native NEAR.
    #[validate(custom = "crate::errors::validate_account_id")]
    pub ft_contract_id: Option<types::AccountId>,
}

// *** Responses ***

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct PaymentActionResponse {
    pub uuid: String,
    pub request_type: backend::RequestType,
    pub status: backend::RequestStatus,
    pub project: backend::ProjectInfo,
    pub token: TokenInfo,
    /// Absent for generic transaction requests which carry no payment args.
    pub payment: Option<PaymentDisplay>,
    pub outcome: ActionOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct PaymentPayloadResponse {
    pub uuid: String,
    pub payload: wallet::FunctionCallPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct CreatedPaymentResponse {
    pub request: backend::TransactionRequestView,
    /// Shareable link opening the pay page for this request.
    pub action_link: String,
}

// ---

/// Display metadata of the token the payment is denominated in. For
/// fungible tokens the fields come from the stored metadata blob, so any of
/// them may be missing; the page renders what it gets.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct TokenInfo {
    pub is_near: bool,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub decimals: Option<u8>,
}

/// Render-ready payment summary: the amount is a human-readable decimal
/// string, or a fallback text when the stored args could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct PaymentDisplay {
    pub amount: String,
    pub receiver_id: Option<types::AccountId>,
}
