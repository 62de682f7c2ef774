use std::time::Duration;

use paperclip::actix::Apiv2Schema;

use crate::{errors, types};

/// Default attached gas for dispatched calls, 30 Tgas.
pub const DEFAULT_FUNCTION_CALL_GAS: u64 = 30_000_000_000_000;
pub const NO_DEPOSIT: u128 = 0;

/// Everything a wallet needs to sign and send one function call.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct FunctionCallPayload {
    pub contract_id: types::AccountId,
    pub method: String,
    pub args: types::JsonArgs,
    pub gas: types::U64,
    pub deposit: types::U128,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct DispatchOutcome {
    pub transaction_hash: types::CryptoHash,
}

/// The wallet-signing capability. The embedder decides what stands behind it:
/// a browser wallet behind a redirect, a CLI signer, or a mock in tests.
/// This service itself only prepares payloads and enforces the deadline.
#[async_trait::async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn sign_and_send(
        &self,
        payload: &FunctionCallPayload,
    ) -> Result<DispatchOutcome, errors::ErrorKind>;
}

/// Hands the payload over to the signer with a hard deadline on the answer.
/// No validation happens here (all guards run before the payload is built)
/// and nothing is retried: a rejection or a network failure propagates to
/// the caller as-is, a missing answer becomes `WalletTimeout`.
pub async fn dispatch(
    signer: &dyn TransactionSigner,
    payload: &FunctionCallPayload,
    timeout: Duration,
) -> crate::Result<DispatchOutcome> {
    tracing::info!(
        target: crate::LOGGER_MSG,
        "Dispatching `{}` to contract {} (gas: {}, deposit: {})",
        payload.method,
        payload.contract_id,
        payload.gas.0,
        payload.deposit.0
    );
    match tokio::time::timeout(timeout, signer.sign_and_send(payload)).await {
        Ok(outcome) => outcome.map_err(Into::into),
        Err(_) => Err(errors::ErrorKind::WalletTimeout(format!(
            "No response from the wallet within {} seconds",
            timeout.as_secs()
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const TX_HASH: &str = "E2gtnNchwDrLUL7prNSdfcUzwwR4egJV4qpncwHz1hwJ";

    fn payload() -> FunctionCallPayload {
        FunctionCallPayload {
            contract_id: types::AccountId("payments.actionlinks.testnet".parse().unwrap()),
            method: "transfer_funds".to_string(),
            args: types::JsonArgs(serde_json::json!({
                "request": {
                    "id": "73e1ba62-5bb2-4d22-a02e-e27533e6b63b",
                    "receiver_account_id": "alice.testnet",
                    "amount": "1000000000000000000000000"
                }
            })),
            gas: types::U64(DEFAULT_FUNCTION_CALL_GAS),
            deposit: types::U128(NO_DEPOSIT),
        }
    }

    struct SigningMock;

    #[async_trait::async_trait]
    impl TransactionSigner for SigningMock {
        async fn sign_and_send(
            &self,
            _payload: &FunctionCallPayload,
        ) -> Result<DispatchOutcome, errors::ErrorKind> {
            Ok(DispatchOutcome {
                transaction_hash: types::CryptoHash::from_str(TX_HASH).unwrap(),
            })
        }
    }

    struct RejectingMock;

    #[async_trait::async_trait]
    impl TransactionSigner for RejectingMock {
        async fn sign_and_send(
            &self,
            _payload: &FunctionCallPayload,
        ) -> Result<DispatchOutcome, errors::ErrorKind> {
            Err(errors::ErrorKind::WalletRejected(
                "Transaction was rejected in the wallet".to_string(),
            ))
        }
    }

    struct StuckMock;

    #[async_trait::async_trait]
    impl TransactionSigner for StuckMock {
        async fn sign_and_send(
            &self,
            _payload: &FunctionCallPayload,
        ) -> Result<DispatchOutcome, errors::ErrorKind> {
            tokio::time::sleep(Duration::from_secs(600)).await;
            unreachable!("the dispatch deadline should fire first")
        }
    }

    #[tokio::test]
    async fn test_dispatch_returns_outcome() {
        let timeout = crate::config::Config::default().wallet_timeout();
        let outcome = dispatch(&SigningMock, &payload(), timeout).await.unwrap();
        assert_eq!(outcome.transaction_hash.to_string(), TX_HASH);
    }

    #[tokio::test]
    async fn test_dispatch_propagates_rejection() {
        let error = dispatch(&RejectingMock, &payload(), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert_eq!(error.code, 400);
        assert!(!error.retriable);
        assert!(error.message.contains("rejected"));
    }

    #[tokio::test]
    async fn test_dispatch_times_out() {
        let error = dispatch(&StuckMock, &payload(), Duration::from_millis(50))
            .await
            .unwrap_err();
        assert_eq!(error.code, 504);
        assert!(error.retriable);
    }

    #[test]
    fn test_payload_wire_shape() {
        let value = serde_json::to_value(payload()).unwrap();
        assert_eq!(value["contract_id"], "payments.actionlinks.testnet");
        assert_eq!(value["gas"], "30000000000000");
        assert_eq!(value["deposit"], "0");
        assert_eq!(value["args"]["request"]["receiver_account_id"], "alice.testnet");
    }
}
