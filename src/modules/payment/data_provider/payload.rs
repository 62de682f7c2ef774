use super::args;
use crate::backend::TransactionRequestView;
use crate::{errors, types, wallet};

/// Assembles the signable payload for a stored request. Gas and deposit fall
/// back to the dispatcher defaults when the record carries none; the request
/// uuid is injected into the native transfer envelope.
pub(crate) fn function_call_payload(
    request: &TransactionRequestView,
) -> crate::Result<wallet::FunctionCallPayload> {
    let contract_id = request.contract_id.clone().ok_or_else(|| {
        errors::ErrorKind::InvalidInput(format!(
            "Request {} has no target contract to call",
            request.uuid
        ))
    })?;
    let value = args::parse_raw_args(&request.args)?;
    let call_args = args::with_request_id(value, &request.uuid);

    Ok(wallet::FunctionCallPayload {
        contract_id,
        method: request.method.clone(),
        args: types::JsonArgs(call_args),
        gas: request
            .gas
            .unwrap_or(types::U64(wallet::DEFAULT_FUNCTION_CALL_GAS)),
        deposit: request.deposit.unwrap_or(types::U128(wallet::NO_DEPOSIT)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StoredArgs;
    use crate::modules::tests::{payment_request, usdt_meta};

    #[test]
    fn test_payload_injects_request_id_into_envelope() {
        let request = payment_request(
            StoredArgs::Encoded(
                r#"{"request":{"amount":"5","receiver_account_id":"alice.testnet"}}"#.to_string(),
            ),
            None,
        );
        let payload = function_call_payload(&request).unwrap();
        assert_eq!(payload.method, "transfer_funds");
        assert_eq!(payload.args.0["request"]["id"], request.uuid);
    }

    #[test]
    fn test_payload_applies_dispatcher_defaults() {
        let request = payment_request(
            StoredArgs::Encoded(r#"{"amount":"1","receiver_id":"bob.testnet"}"#.to_string()),
            Some(usdt_meta()),
        );
        let payload = function_call_payload(&request).unwrap();
        assert_eq!(payload.gas, types::U64(wallet::DEFAULT_FUNCTION_CALL_GAS));
        assert_eq!(payload.deposit, types::U128(wallet::NO_DEPOSIT));
    }

    #[test]
    fn test_payload_keeps_stored_gas_and_deposit() {
        let mut request = payment_request(
            StoredArgs::Encoded(r#"{"amount":"1","receiver_id":"bob.testnet"}"#.to_string()),
            Some(usdt_meta()),
        );
        request.gas = Some(types::U64(100_000_000_000_000));
        request.deposit = Some(types::U128(1));
        let payload = function_call_payload(&request).unwrap();
        assert_eq!(payload.gas, types::U64(100_000_000_000_000));
        assert_eq!(payload.deposit, types::U128(1));
    }

    #[test]
    fn test_payload_requires_a_target_contract() {
        let mut request = payment_request(
            StoredArgs::Parsed(serde_json::json!({"amount": "1", "receiver_id": "bob.testnet"})),
            None,
        );
        request.contract_id = None;
        let error = function_call_payload(&request).unwrap_err();
        assert_eq!(error.code, 400);
    }

    #[test]
    fn test_payload_refuses_malformed_args() {
        let request = payment_request(StoredArgs::Encoded("{not valid json".to_string()), None);
        let error = function_call_payload(&request).unwrap_err();
        assert_eq!(error.code, 400);
        assert!(error.message.contains("not valid JSON"));
    }
}
