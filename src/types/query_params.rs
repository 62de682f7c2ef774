use std::str::FromStr;

use paperclip::actix::Apiv2Schema;

use crate::types;

pub(crate) const USER_REJECTED_ERROR_CODE: &str = "userRejected";

/// Query params appended by the wallet when it redirects back to an action
/// link after the signing attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct WalletCallbackParams {
    /// Comma-separated hashes of the transactions the wallet has sent.
    #[serde(rename = "transactionHashes")]
    pub transaction_hashes: Option<String>,
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema,
)]
pub enum OutcomeState {
    Pending,
    Success,
    Rejected,
    Failure,
}

/// The resolved result of the signing attempt for the given action.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct ActionOutcome {
    pub state: OutcomeState,
    pub transaction_hashes: Option<Vec<types::CryptoHash>>,
    pub error_message: Option<String>,
}

/// Folds the wallet redirect params into one of the four outcome states:
/// hashes mean success, `userRejected` means the user closed the wallet
/// prompt, any other error code is a failure, and no params at all means the
/// action is still pending.
pub(crate) fn resolve_outcome(params: &WalletCallbackParams) -> crate::Result<ActionOutcome> {
    if let Some(hashes) = &params.transaction_hashes {
        let transaction_hashes = hashes
            .split(',')
            .map(|hash| {
                Ok(types::CryptoHash(
                    near_primitives::hash::CryptoHash::from_str(hash.trim())?,
                ))
            })
            .collect::<crate::Result<Vec<_>>>()?;
        return Ok(ActionOutcome {
            state: OutcomeState::Success,
            transaction_hashes: Some(transaction_hashes),
            error_message: None,
        });
    }
    Ok(match &params.error_code {
        Some(code) if code == USER_REJECTED_ERROR_CODE => ActionOutcome {
            state: OutcomeState::Rejected,
            transaction_hashes: None,
            error_message: params.error_message.clone(),
        },
        Some(code) => ActionOutcome {
            state: OutcomeState::Failure,
            transaction_hashes: None,
            error_message: Some(
                params
                    .error_message
                    .clone()
                    .unwrap_or_else(|| format!("Wallet returned error code `{}`", code)),
            ),
        },
        None => ActionOutcome {
            state: OutcomeState::Pending,
            transaction_hashes: None,
            error_message: None,
        },
    })
}
