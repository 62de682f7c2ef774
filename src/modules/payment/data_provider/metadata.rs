use crate::backend::{TokenMetadata, TransactionRequestView};
use crate::modules::payment;
use crate::{errors, rpc_helpers, types};

/// The only metadata spec accepted for fungible-token payments, per
/// https://nomicon.io/Standards/Tokens/FungibleToken/Metadata
pub(crate) const FT_METADATA_SPEC: &str = "ft-1.0.0";

pub(crate) async fn get_ft_metadata(
    rpc_client: &near_jsonrpc_client::JsonRpcClient,
    contract_id: near_primitives::types::AccountId,
) -> crate::Result<TokenMetadata> {
    let request = rpc_helpers::get_function_call_request(
        contract_id.clone(),
        "ft_metadata",
        serde_json::json!({}),
    );
    let response = rpc_helpers::wrapped_call(rpc_client, request, &contract_id).await?;

    Ok(serde_json::from_slice::<TokenMetadata>(&response.result)?)
}

/// Token guard: refuses contracts whose declared metadata spec is missing or
/// unsupported. Runs before any amount conversion or receiver check.
pub(crate) fn validate_ft_metadata(metadata: &TokenMetadata) -> crate::Result<()> {
    match &metadata.spec {
        Some(spec) if spec == FT_METADATA_SPEC => Ok(()),
        Some(spec) => Err(errors::ErrorKind::FungibleTokenError(format!(
            "Token metadata spec `{}` is not supported, expected `{}`",
            spec, FT_METADATA_SPEC
        ))
        .into()),
        None => Err(errors::ErrorKind::FungibleTokenError(
            "Token metadata does not declare a spec".to_string(),
        )
        .into()),
    }
}

/// Display token info for the action page: native NEAR, or whatever the
/// stored metadata blob of the fungible token carries. No chain round trip
/// happens at view time; the blob was stored when the request was created.
pub(crate) fn token_info(view: &TransactionRequestView) -> payment::schemas::TokenInfo {
    let is_near = view.is_near_token.unwrap_or_else(|| view.meta.is_none());
    if is_near {
        return near_token_info();
    }
    match &view.meta {
        Some(meta) => payment::schemas::TokenInfo {
            is_near: false,
            symbol: meta.symbol.clone(),
            name: meta.name.clone(),
            icon: meta.icon.clone(),
            decimals: meta.decimals,
        },
        None => payment::schemas::TokenInfo {
            is_near: false,
            symbol: None,
            name: None,
            icon: None,
            decimals: None,
        },
    }
}

pub(crate) fn near_token_info() -> payment::schemas::TokenInfo {
    payment::schemas::TokenInfo {
        is_near: true,
        name: Some("NEAR blockchain native token".to_string()),
        symbol: Some("NEAR".to_string()),
        icon: Some("https://raw.githubusercontent.com/near/near-wallet/7ef3c824404282b76b36da2dff4f3e593e7f928d/packages/frontend/src/images/near.svg".to_string()),
        decimals: Some(types::amounts::NEAR_DECIMALS),
    }
}
