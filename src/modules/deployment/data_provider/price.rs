use crate::{errors, rpc_helpers, types};

/// Base deposit covering the factory storage for the deployed contract,
/// 0.1 NEAR in yocto.
pub(crate) const DEPLOYMENT_BASE_DEPOSIT: u128 = 100_000_000_000_000_000_000_000;

/// Asks the factory contract what the given template costs to deploy.
pub(crate) async fn get_deployment_price(
    rpc_client: &near_jsonrpc_client::JsonRpcClient,
    factory_contract_id: near_primitives::types::AccountId,
    contract_id: &str,
) -> crate::Result<u128> {
    let request = rpc_helpers::get_function_call_request(
        factory_contract_id.clone(),
        "get_contract_deployment_price",
        serde_json::json!({ "contract_id": contract_id }),
    );
    let response = rpc_helpers::wrapped_call(rpc_client, request, &factory_contract_id).await?;

    Ok(serde_json::from_slice::<types::U128>(&response.result)?.0)
}

pub(crate) fn required_deposit(price: u128) -> crate::Result<u128> {
    DEPLOYMENT_BASE_DEPOSIT.checked_add(price).ok_or_else(|| {
        errors::ErrorKind::ContractError(format!(
            "Deployment price {} overflows the deposit computation",
            price
        ))
        .into()
    })
}
