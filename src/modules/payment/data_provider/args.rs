use serde::{Deserialize, Serialize};

use crate::backend::{RequestType, StoredArgs, TokenMetadata, TransactionRequestView};
use crate::modules::payment;
use crate::{errors, types};

/// Shown instead of the amount when the stored args cannot be decoded; the
/// action page still renders instead of failing.
pub(crate) const AMOUNT_PARSE_FALLBACK: &str = "Couldn't parse amount";

/// Args of the native `transfer_funds` call, i.e. the content of the
/// `request` envelope the payments contract expects. `amount` is yocto.
/// `id` gets filled with the request uuid right before dispatch so the
/// contract can match the incoming payment to the stored request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NativeTransferRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub receiver_account_id: types::AccountId,
    pub amount: types::U128,
}

/// NEP-141 `ft_transfer` args; `amount` is in token base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FtTransferArgs {
    pub receiver_id: types::AccountId,
    pub amount: types::U128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// The two supported payment dialects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransferArgs {
    Native(NativeTransferRequest),
    Ft(FtTransferArgs),
}

/// Normalized payment summary, amounts already human-readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PaymentInfo {
    pub amount: String,
    pub receiver_id: types::AccountId,
}

/// Decodes the stored args into a JSON value, whichever encoding the
/// backend returned.
pub(crate) fn parse_raw_args(args: &StoredArgs) -> crate::Result<serde_json::Value> {
    match args {
        StoredArgs::Encoded(raw) => serde_json::from_str(raw).map_err(|error| {
            errors::ErrorKind::ParseError(format!("Stored args are not valid JSON: {}", error))
                .into()
        }),
        StoredArgs::Parsed(value) => Ok(value.clone()),
    }
}

/// Explicit dialect discriminator. The `request` envelope key selects the
/// native dialect; a flat object carrying `receiver_id` + `amount` selects
/// the FT one; anything else is opaque, which is legal for generic
/// transaction requests.
pub(crate) fn classify_transfer_args(
    value: &serde_json::Value,
) -> crate::Result<Option<TransferArgs>> {
    let object = match value.as_object() {
        Some(object) => object,
        None => {
            return Err(errors::ErrorKind::ParseError(format!(
                "Expected a JSON object as function call args, got: {}",
                value
            ))
            .into())
        }
    };
    if let Some(request) = object.get("request") {
        let request: NativeTransferRequest =
            serde_json::from_value(request.clone()).map_err(|error| {
                errors::ErrorKind::ParseError(format!(
                    "Malformed native transfer envelope: {}",
                    error
                ))
            })?;
        return Ok(Some(TransferArgs::Native(request)));
    }
    if object.contains_key("receiver_id") && object.contains_key("amount") {
        let args: FtTransferArgs = serde_json::from_value(value.clone()).map_err(|error| {
            errors::ErrorKind::ParseError(format!("Malformed ft_transfer args: {}", error))
        })?;
        return Ok(Some(TransferArgs::Ft(args)));
    }
    Ok(None)
}

/// Converts classified transfer args into the normalized summary. Native
/// amounts are always yocto (24 decimals); FT amounts are scaled by the
/// `decimals` of the stored token metadata.
pub(crate) fn payment_info(
    transfer: &TransferArgs,
    meta: Option<&TokenMetadata>,
) -> PaymentInfo {
    match transfer {
        TransferArgs::Native(request) => PaymentInfo {
            amount: types::amounts::from_base_units(
                request.amount.0,
                types::amounts::NEAR_DECIMALS,
            ),
            receiver_id: request.receiver_account_id.clone(),
        },
        TransferArgs::Ft(args) => {
            let decimals = meta.and_then(|meta| meta.decimals).unwrap_or(0);
            PaymentInfo {
                amount: types::amounts::from_base_units(args.amount.0, decimals),
                receiver_id: args.receiver_id.clone(),
            }
        }
    }
}

/// Render-ready payment summary for the action page. Never fails: malformed
/// args degrade to the fallback display for payment requests and to nothing
/// for generic transaction requests.
pub(crate) fn payment_display(
    request: &TransactionRequestView,
) -> Option<payment::schemas::PaymentDisplay> {
    let transfer = match parse_raw_args(&request.args)
        .and_then(|value| classify_transfer_args(&value))
    {
        Ok(transfer) => transfer,
        Err(error) => {
            tracing::warn!(
                target: crate::LOGGER_MSG,
                "Failed to read args of request {}: {}",
                request.uuid,
                error
            );
            None
        }
    };
    match transfer {
        Some(transfer) => {
            let info = payment_info(&transfer, request.meta.as_ref());
            Some(payment::schemas::PaymentDisplay {
                amount: info.amount,
                receiver_id: Some(info.receiver_id),
            })
        }
        None => match request.request_type {
            RequestType::Payment => Some(payment::schemas::PaymentDisplay {
                amount: AMOUNT_PARSE_FALLBACK.to_string(),
                receiver_id: None,
            }),
            RequestType::Transaction => None,
        },
    }
}

/// Fills the request uuid into the native envelope right before the payload
/// is assembled. FT and opaque args pass through untouched, extra envelope
/// fields are preserved.
pub(crate) fn with_request_id(value: serde_json::Value, uuid: &str) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut object) => {
            if let Some(serde_json::Value::Object(request)) = object.get_mut("request") {
                request.insert(
                    "id".to_string(),
                    serde_json::Value::String(uuid.to_string()),
                );
            }
            serde_json::Value::Object(object)
        }
        value => value,
    }
}
