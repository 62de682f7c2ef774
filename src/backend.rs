use paperclip::actix::Apiv2Schema;
use paperclip::v2::{models::DataType, schema::TypedData};

use crate::{errors, types};

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Thin client for the platform backend which owns all the request records.
/// This service only reads them and forwards newly created ones; it never
/// persists anything itself.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(errors::ErrorKind::from)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub async fn get_transaction_request(
        &self,
        uuid: &str,
    ) -> crate::Result<TransactionRequestView> {
        self.get_json(
            &format!("transaction-requests/{}", uuid),
            &format!("transaction request `{}`", uuid),
        )
        .await
    }

    pub async fn get_deployed_contract(&self, uuid: &str) -> crate::Result<DeployedContractView> {
        self.get_json(
            &format!("deployed-contracts/{}", uuid),
            &format!("deployed contract request `{}`", uuid),
        )
        .await
    }

    pub async fn create_transaction_request(
        &self,
        request: &CreateTransactionRequest,
    ) -> crate::Result<TransactionRequestView> {
        let url = format!("{}/transaction-requests", self.base_url);
        tracing::info!(target: crate::LOGGER_MSG, "Backend request: POST {}", url);
        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(errors::ErrorKind::BackendError(format!(
                "POST {} answered with status {}",
                url, status
            ))
            .into());
        }
        Ok(response.json().await?)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        entity: &str,
    ) -> crate::Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::info!(target: crate::LOGGER_MSG, "Backend request: GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(
                errors::ErrorKind::InvalidInput(format!("The {} does not exist", entity)).into(),
            );
        }
        if !status.is_success() {
            return Err(errors::ErrorKind::BackendError(format!(
                "GET {} answered with status {}",
                url, status
            ))
            .into());
        }
        Ok(response.json().await?)
    }
}

// *** Backend records ***

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema,
)]
pub enum RequestType {
    Transaction,
    Payment,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema,
)]
pub enum RequestStatus {
    Pending,
    Success,
    Failure,
}

/// Stored function-call args. The backend stores a JSON-encoded string;
/// older records hold the parsed object itself. Both shapes must resolve.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StoredArgs {
    Encoded(String),
    Parsed(serde_json::Value),
}

impl TypedData for StoredArgs {
    fn data_type() -> DataType {
        DataType::Object
    }
}

/// Token metadata as stored next to the request and as answered by
/// `ft_metadata` view calls. Every field is optional here: broken and
/// half-implemented token contracts are a fact of life, and the spec
/// validation happens separately in the payment module.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct TokenMetadata {
    pub spec: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub icon: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct ProjectInfo {
    pub name: String,
    pub logo_url: Option<String>,
}

/// One transaction/payment request exactly as the backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct TransactionRequestView {
    pub uuid: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    #[serde(rename = "contractId")]
    pub contract_id: Option<types::AccountId>,
    pub method: String,
    pub args: StoredArgs,
    pub gas: Option<types::U64>,
    pub deposit: Option<types::U128>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub is_near_token: Option<bool>,
    pub meta: Option<TokenMetadata>,
    pub project: ProjectInfo,
}

/// A contract-deployment request. `args` is passed to the factory contract
/// verbatim; this service only needs `contract_id` out of it to ask for the
/// deployment price.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeployedContractView {
    pub uuid: String,
    pub args: serde_json::Value,
    pub project_name: Option<String>,
    pub project_logo_url: Option<String>,
    pub contract_template_name: Option<String>,
    pub contract_template_description: Option<String>,
}

/// POST body forwarded to the backend when a payment request is created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateTransactionRequest {
    pub project_id: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    #[serde(rename = "contractId")]
    pub contract_id: types::AccountId,
    pub method: String,
    pub args: serde_json::Value,
    pub gas: Option<types::U64>,
    pub deposit: Option<types::U128>,
    pub is_near_token: bool,
    pub meta: Option<TokenMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_request_with_encoded_args() {
        let view: TransactionRequestView = serde_json::from_value(serde_json::json!({
            "uuid": "73e1ba62-5bb2-4d22-a02e-e27533e6b63b",
            "type": "Payment",
            "status": "Pending",
            "contractId": "token.bridged.testnet",
            "method": "ft_transfer",
            "args": "{\"receiver_id\":\"bob.testnet\",\"amount\":\"2500000\"}",
            "deposit": "1",
            "is_near_token": false,
            "meta": { "spec": "ft-1.0.0", "symbol": "USDT", "decimals": 6 },
            "project": { "name": "Coffee shop", "logo_url": null }
        }))
        .unwrap();

        assert_eq!(view.request_type, RequestType::Payment);
        assert_eq!(view.status, RequestStatus::Pending);
        assert!(matches!(view.args, StoredArgs::Encoded(_)));
        assert_eq!(view.deposit, Some(types::U128(1)));
        assert_eq!(view.gas, None);
        assert_eq!(view.meta.unwrap().decimals, Some(6));
    }

    #[test]
    fn test_transaction_request_with_parsed_args() {
        let view: TransactionRequestView = serde_json::from_value(serde_json::json!({
            "uuid": "73e1ba62-5bb2-4d22-a02e-e27533e6b63b",
            "type": "Transaction",
            "status": "Success",
            "method": "set_greeting",
            "args": { "message": "howdy" },
            "txHash": "E2gtnNchwDrLUL7prNSdfcUzwwR4egJV4qpncwHz1hwJ",
            "project": { "name": "Greeter" }
        }))
        .unwrap();

        assert_eq!(view.contract_id, None);
        assert!(matches!(view.args, StoredArgs::Parsed(_)));
        assert!(view.tx_hash.is_some());
        assert!(view.meta.is_none());
    }

    #[test]
    fn test_create_request_wire_names() {
        let body = CreateTransactionRequest {
            project_id: "project-1".to_string(),
            request_type: RequestType::Payment,
            contract_id: types::AccountId(
                "payments.actionlinks.testnet".parse().unwrap(),
            ),
            method: "transfer_funds".to_string(),
            args: serde_json::json!({"request": {"receiver_account_id": "alice.testnet"}}),
            gas: None,
            deposit: Some(types::U128(5)),
            is_near_token: true,
            meta: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["type"], "Payment");
        assert_eq!(value["contractId"], "payments.actionlinks.testnet");
        assert_eq!(value["deposit"], "5");
    }

    #[test]
    fn test_deployed_contract_record() {
        let view: DeployedContractView = serde_json::from_value(serde_json::json!({
            "uuid": "0cc03017-5c1b-4cfb-a0f3-fc238ab5aadd",
            "args": { "contract_id": "counter-template.testnet", "name": "my-counter" },
            "project_name": "Deployer",
            "contract_template_name": "Counter"
        }))
        .unwrap();

        assert_eq!(view.args["contract_id"], "counter-template.testnet");
        assert_eq!(view.contract_template_description, None);
    }
}
