use std::fmt;

use derive_more::{AsRef, Deref, From, FromStr, Into};
use paperclip::v2::{models::DataType, schema::TypedData};
use serde::{Deserialize, Serialize};

/// Transaction hash as reported by the wallet after signing.
#[derive(
    Eq,
    Ord,
    Hash,
    Clone,
    PartialEq,
    PartialOrd,
    From,
    FromStr,
    Into,
    AsRef,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct CryptoHash(pub(crate) near_primitives::hash::CryptoHash);

impl fmt::Debug for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for CryptoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TypedData for CryptoHash {
    fn data_type() -> DataType {
        DataType::String
    }
}
