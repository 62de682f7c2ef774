mod price;

pub(crate) use price::{get_deployment_price, required_deposit};
