use super::{args, metadata, receiver};
use crate::modules::payment;
use crate::{backend, config, errors, types};

/// NEP-141 requires exactly 1 yoctoNEAR attached to `ft_transfer` as a
/// proof of intent.
pub(crate) const FT_TRANSFER_DEPOSIT: u128 = 1;

/// Builds the backend record for a new payment request.
///
/// Native flow: `transfer_funds` on the configured payments contract, the
/// yocto amount doubling as the attached deposit. FT flow: the token
/// metadata spec is validated and the receiver registration checked before
/// anything is stored, then `ft_transfer` on the token contract with the
/// 1-yocto security deposit and the fetched metadata blob kept for display.
pub(crate) async fn build_create_request(
    rpc_client: &near_jsonrpc_client::JsonRpcClient,
    config: &config::Config,
    input: &payment::schemas::CreatePaymentRequest,
) -> crate::Result<backend::CreateTransactionRequest> {
    match &input.ft_contract_id {
        Some(token_contract_id) => {
            let token_metadata =
                metadata::get_ft_metadata(rpc_client, token_contract_id.0.clone()).await?;
            metadata::validate_ft_metadata(&token_metadata)?;
            receiver::check_receiver_registered(
                rpc_client,
                token_contract_id.0.clone(),
                &input.receiver_id.0,
            )
            .await?;

            let decimals = token_metadata.decimals.unwrap_or(0);
            let amount = positive_base_units(&input.amount, decimals)?;
            let call_args = serde_json::to_value(args::FtTransferArgs {
                receiver_id: input.receiver_id.clone(),
                amount: types::U128(amount),
                memo: None,
            })?;

            Ok(backend::CreateTransactionRequest {
                project_id: input.project_id.clone(),
                request_type: backend::RequestType::Payment,
                contract_id: token_contract_id.clone(),
                method: "ft_transfer".to_string(),
                args: call_args,
                gas: None,
                deposit: Some(types::U128(FT_TRANSFER_DEPOSIT)),
                is_near_token: false,
                meta: Some(token_metadata),
            })
        }
        None => {
            let amount = positive_base_units(&input.amount, types::amounts::NEAR_DECIMALS)?;
            let call_args = serde_json::json!({
                "request": serde_json::to_value(args::NativeTransferRequest {
                    id: None,
                    receiver_account_id: input.receiver_id.clone(),
                    amount: types::U128(amount),
                })?
            });
            let contract_id = types::AccountId(config.payments_account_id()?);

            Ok(backend::CreateTransactionRequest {
                project_id: input.project_id.clone(),
                request_type: backend::RequestType::Payment,
                contract_id,
                method: "transfer_funds".to_string(),
                args: call_args,
                gas: None,
                deposit: Some(types::U128(amount)),
                is_near_token: true,
                meta: None,
            })
        }
    }
}

/// Zero never reaches storage: NEP-141 refuses a zero `ft_transfer`
/// on-chain, and a zero native transfer moves nothing.
fn positive_base_units(amount: &str, decimals: u8) -> crate::Result<u128> {
    let base_units = types::amounts::to_base_units(amount, decimals)?;
    if base_units == 0 {
        return Err(
            errors::ErrorKind::InvalidInput("Amount must be greater than 0".to_string()).into(),
        );
    }
    Ok(base_units)
}
