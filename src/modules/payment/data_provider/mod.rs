mod args;
mod create;
mod metadata;
mod payload;
mod receiver;

pub(crate) use args::payment_display;
pub(crate) use create::build_create_request;
pub(crate) use metadata::token_info;
pub(crate) use payload::function_call_payload;
