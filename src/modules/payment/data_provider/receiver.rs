use crate::{errors, rpc_helpers, types};

/// Answer of `storage_balance_of`. JSON `null` means the account never made
/// a storage deposit on the token contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub(crate) struct StorageBalance {
    pub total: types::U128,
    pub available: types::U128,
}

pub(crate) fn parse_storage_balance(bytes: &[u8]) -> crate::Result<Option<StorageBalance>> {
    Ok(serde_json::from_slice::<Option<StorageBalance>>(bytes)?)
}

/// Registration guard: `ft_transfer` to an unregistered receiver fails
/// on-chain, so the receiver's storage deposit is checked before the payment
/// request is ever stored.
pub(crate) async fn check_receiver_registered(
    rpc_client: &near_jsonrpc_client::JsonRpcClient,
    token_contract_id: near_primitives::types::AccountId,
    receiver_id: &near_primitives::types::AccountId,
) -> crate::Result<()> {
    let request = rpc_helpers::get_function_call_request(
        token_contract_id.clone(),
        "storage_balance_of",
        serde_json::json!({ "account_id": receiver_id }),
    );
    let response = rpc_helpers::wrapped_call(rpc_client, request, &token_contract_id).await?;
    match parse_storage_balance(&response.result)? {
        Some(_) => Ok(()),
        None => Err(errors::ErrorKind::ReceiverNotRegistered(format!(
            "Account `{}` is not registered with the token contract `{}`",
            receiver_id, token_contract_id
        ))
        .into()),
    }
}
