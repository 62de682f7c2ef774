use paperclip::actix::Apiv2Schema;
use validator::Validate;

use crate::types::query_params::ActionOutcome;
use crate::{backend, types, wallet};

// *** Requests ***

#[derive(
    Validate, Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema,
)]
pub struct DeploymentActionRequest {
    #[validate(length(min = 1))]
    pub uuid: String,
}

// *** Responses ***

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct DeploymentActionResponse {
    pub uuid: String,
    pub project: backend::ProjectInfo,
    pub template: TemplateInfo,
    /// Total deposit the signer attaches: the base storage deposit plus the
    /// template price reported by the factory contract, in yocto.
    pub deposit: types::U128,
    /// Same deposit rendered as a human-readable NEAR amount.
    pub deposit_display: String,
    pub payload: wallet::FunctionCallPayload,
    pub outcome: ActionOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Apiv2Schema)]
pub struct TemplateInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}
