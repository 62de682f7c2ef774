use paperclip::actix::{
    api_v2_operation,
    web::{self, Json},
};

use super::{data_provider, schemas};
use crate::{backend, config, errors, types};

#[api_v2_operation(tags(Payment))]
/// Resolve a payment action link
///
/// This endpoint returns everything the pay page needs to render the given
/// request: project info, token info, the normalized payment summary
/// (human-readable amount + receiver), and the outcome resolved from the
/// wallet callback params, if the wallet already redirected back.
pub async fn get_payment_action(
    backend_client: web::Data<backend::BackendClient>,
    _: crate::types::platform_api_key::PlatformApiKey,
    request: actix_web_validator::Path<schemas::ActionRequest>,
    callback_params: web::Query<types::query_params::WalletCallbackParams>,
) -> crate::Result<Json<schemas::PaymentActionResponse>> {
    let outcome = types::query_params::resolve_outcome(&callback_params)?;
    let view = backend_client.get_transaction_request(&request.uuid).await?;

    let token = data_provider::token_info(&view);
    let payment = data_provider::payment_display(&view);

    Ok(Json(schemas::PaymentActionResponse {
        uuid: view.uuid,
        request_type: view.request_type,
        status: view.status,
        project: view.project,
        token,
        payment,
        outcome,
    }))
}

#[api_v2_operation(tags(Payment))]
/// Get the signable payload for a payment action
///
/// This endpoint returns the exact function call the wallet should sign for
/// the given request. Only `Pending` requests can be signed; the request
/// uuid is injected into the native transfer envelope so the payments
/// contract can match the incoming transfer to the stored request.
pub async fn get_payment_payload(
    backend_client: web::Data<backend::BackendClient>,
    _: crate::types::platform_api_key::PlatformApiKey,
    request: actix_web_validator::Path<schemas::ActionRequest>,
) -> crate::Result<Json<schemas::PaymentPayloadResponse>> {
    let view = backend_client.get_transaction_request(&request.uuid).await?;
    if view.status != backend::RequestStatus::Pending {
        return Err(errors::ErrorKind::InvalidInput(format!(
            "Request {} is already {:?} and cannot be signed again",
            view.uuid, view.status
        ))
        .into());
    }

    let payload = data_provider::function_call_payload(&view)?;

    Ok(Json(schemas::PaymentPayloadResponse {
        uuid: view.uuid,
        payload,
    }))
}

#[api_v2_operation(tags(Payment))]
/// Create a payment request
///
/// This endpoint validates the receiver and the token (for fungible-token
/// payments the metadata spec must be `ft-1.0.0` and the receiver must hold
/// a storage deposit on the token contract), converts the human-readable
/// amount into base units, and stores the request through the backend.
/// The response carries the shareable action link.
pub async fn create_payment_request(
    backend_client: web::Data<backend::BackendClient>,
    rpc_client: web::Data<near_jsonrpc_client::JsonRpcClient>,
    app_config: web::Data<config::Config>,
    _: crate::types::platform_api_key::PlatformApiKey,
    body: actix_web_validator::Json<schemas::CreatePaymentRequest>,
) -> crate::Result<Json<schemas::CreatedPaymentResponse>> {
    let create_request =
        data_provider::build_create_request(&rpc_client, &app_config, &body).await?;
    let view = backend_client.create_transaction_request(&create_request).await?;
    let action_link = format!("{}/action/payment/{}", app_config.links_origin, view.uuid);

    Ok(Json(schemas::CreatedPaymentResponse {
        request: view,
        action_link,
    }))
}
