use std::time::Duration;

use crate::errors;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub addr: String,
    pub cors_allowed_origins: Vec<String>,
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Escrow contract receiving native `transfer_funds` payments.
    pub payments_contract_id: String,
    /// Factory contract answering `get_contract_deployment_price` and
    /// executing `create_factory_subaccount_and_deploy`.
    pub factory_contract_id: String,
    /// Public origin used when building shareable action links.
    pub links_origin: String,
    /// How long `wallet::dispatch` waits for the signer before giving up.
    pub wallet_timeout_secs: u64,
}

impl Config {
    pub fn wallet_timeout(&self) -> Duration {
        Duration::from_secs(self.wallet_timeout_secs)
    }

    /// Parsed `payments_contract_id`; a bad value answers as a server error,
    /// never as caller input.
    pub fn payments_account_id(&self) -> crate::Result<near_primitives::types::AccountId> {
        parse_contract_id(&self.payments_contract_id, "payments_contract_id")
    }

    pub fn factory_account_id(&self) -> crate::Result<near_primitives::types::AccountId> {
        parse_contract_id(&self.factory_contract_id, "factory_contract_id")
    }
}

fn parse_contract_id(
    value: &str,
    field: &str,
) -> crate::Result<near_primitives::types::AccountId> {
    value.parse().map_err(|error| {
        errors::ErrorKind::InternalError(format!(
            "Misconfigured {}: could not parse `{}`: {}",
            field, value, error
        ))
        .into()
    })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3050".to_owned(),
            cors_allowed_origins: vec!["*".to_owned()],
            limits: LimitsConfig::default(),
            payments_contract_id: "payments.actionlinks.testnet".to_owned(),
            factory_contract_id: "factory.actionlinks.testnet".to_owned(),
            links_origin: "http://localhost:3000".to_owned(),
            wallet_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LimitsConfig {
    pub input_payload_max_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            input_payload_max_size: 10 * 1024 * 1024,
        }
    }
}
