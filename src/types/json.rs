use derive_more::{AsRef, Deref, From, Into};
use paperclip::v2::{models::DataType, schema::TypedData};
use serde::{Deserialize, Serialize};

/// Arbitrary JSON arguments attached to a function call.
/// Deliberately schema-opaque: the exact shape belongs to the target contract.
#[derive(Debug, Clone, PartialEq, Eq, From, Into, AsRef, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonArgs(pub(crate) serde_json::Value);

impl TypedData for JsonArgs {
    fn data_type() -> DataType {
        DataType::Object
    }
}
