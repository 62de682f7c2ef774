use std::time::Duration;

use near_action_link_api::{backend, config, start};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let backend_url = &std::env::var("BACKEND_URL").expect("failed to get backend url");
    let backend_client =
        backend::BackendClient::new(backend_url).expect("failed to create the backend client");
    let rpc_url =
        std::env::var("RPC_URL").unwrap_or_else(|_| "https://rpc.testnet.near.org".to_string());
    let rpc_client = near_jsonrpc_client::JsonRpcClient::connect(rpc_url.as_str());

    start(config::Config::default(), backend_client, rpc_client);
    loop {
        tokio::time::sleep(Duration::from_secs(100)).await;
    }
}
