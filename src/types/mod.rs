pub(crate) mod account_id;
pub(crate) mod amounts;
pub(crate) mod cryptohash;
pub(crate) mod json;
pub(crate) mod numeric;
pub mod platform_api_key;
pub mod query_params;

pub(crate) use account_id::AccountId;
pub(crate) use cryptohash::CryptoHash;
pub(crate) use json::JsonArgs;
pub(crate) use numeric::{U128, U64};
