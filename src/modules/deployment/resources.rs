use paperclip::actix::{
    api_v2_operation,
    web::{self, Json},
};

use super::{data_provider, schemas};
use crate::{backend, config, errors, types, wallet};

#[api_v2_operation(tags(Deployment))]
/// Resolve a deployment action link
///
/// This endpoint returns everything the deploy page needs: project and
/// template info, the total deposit (base storage deposit plus the template
/// price the factory contract quotes right now), the signable payload, and
/// the outcome resolved from the wallet callback params.
pub async fn get_deployment_action(
    backend_client: web::Data<backend::BackendClient>,
    rpc_client: web::Data<near_jsonrpc_client::JsonRpcClient>,
    app_config: web::Data<config::Config>,
    _: crate::types::platform_api_key::PlatformApiKey,
    request: actix_web_validator::Path<schemas::DeploymentActionRequest>,
    callback_params: web::Query<types::query_params::WalletCallbackParams>,
) -> crate::Result<Json<schemas::DeploymentActionResponse>> {
    let outcome = types::query_params::resolve_outcome(&callback_params)?;
    let view = backend_client.get_deployed_contract(&request.uuid).await?;

    let template_contract_id = view.args["contract_id"].as_str().ok_or_else(|| {
        errors::ErrorKind::InvalidInput(format!(
            "Deployment request {} does not carry a contract_id in its args",
            view.uuid
        ))
    })?;
    let factory_contract_id = app_config.factory_account_id()?;

    let price = data_provider::get_deployment_price(
        &rpc_client,
        factory_contract_id.clone(),
        template_contract_id,
    )
    .await?;
    let deposit = data_provider::required_deposit(price)?;

    let payload = wallet::FunctionCallPayload {
        contract_id: factory_contract_id.into(),
        method: "create_factory_subaccount_and_deploy".to_string(),
        args: view.args.clone().into(),
        gas: types::U64(wallet::DEFAULT_FUNCTION_CALL_GAS),
        deposit: types::U128(deposit),
    };

    Ok(Json(schemas::DeploymentActionResponse {
        uuid: view.uuid,
        project: backend::ProjectInfo {
            name: view.project_name.unwrap_or_default(),
            logo_url: view.project_logo_url,
        },
        template: schemas::TemplateInfo {
            name: view.contract_template_name,
            description: view.contract_template_description,
        },
        deposit: types::U128(deposit),
        deposit_display: types::amounts::from_base_units(deposit, types::amounts::NEAR_DECIMALS),
        payload,
        outcome,
    }))
}
