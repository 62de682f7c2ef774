pub(crate) mod deployment;
pub(crate) mod payment;

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use actix_web::{web, App, HttpResponse, HttpServer};

    use crate::backend::{
        ProjectInfo, RequestStatus, RequestType, StoredArgs, TokenMetadata, TransactionRequestView,
    };

    pub(crate) fn payment_request(
        args: StoredArgs,
        meta: Option<TokenMetadata>,
    ) -> TransactionRequestView {
        let is_near = meta.is_none();
        TransactionRequestView {
            uuid: "73e1ba62-5bb2-4d22-a02e-e27533e6b63b".to_string(),
            request_type: RequestType::Payment,
            status: RequestStatus::Pending,
            contract_id: Some(
                "payments.actionlinks.testnet"
                    .parse::<crate::types::AccountId>()
                    .unwrap(),
            ),
            method: if is_near { "transfer_funds" } else { "ft_transfer" }.to_string(),
            args,
            gas: None,
            deposit: None,
            tx_hash: None,
            is_near_token: Some(is_near),
            meta,
            project: ProjectInfo {
                name: "Coffee shop".to_string(),
                logo_url: None,
            },
        }
    }

    pub(crate) fn usdt_meta() -> TokenMetadata {
        TokenMetadata {
            spec: Some("ft-1.0.0".to_string()),
            name: Some("Tether USD".to_string()),
            symbol: Some("USDT".to_string()),
            icon: None,
            reference: None,
            reference_hash: None,
            decimals: Some(6),
        }
    }

    /// In-process NEAR RPC endpoint answering the view calls the payment
    /// flow makes, recording the order they arrive in.
    pub(crate) struct RpcStub {
        calls: Mutex<Vec<String>>,
        ft_metadata: serde_json::Value,
        storage_balance: serde_json::Value,
    }

    impl RpcStub {
        pub(crate) fn serving(
            ft_metadata: serde_json::Value,
            storage_balance: serde_json::Value,
        ) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                ft_metadata,
                storage_balance,
            }
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn answer(&self, method_name: &str) -> serde_json::Value {
            self.calls.lock().unwrap().push(method_name.to_string());
            match method_name {
                "ft_metadata" => self.ft_metadata.clone(),
                "storage_balance_of" => self.storage_balance.clone(),
                other => serde_json::Value::String(format!("unexpected view call `{}`", other)),
            }
        }
    }

    async fn rpc_stub_endpoint(
        stub: web::Data<RpcStub>,
        body: web::Json<serde_json::Value>,
    ) -> HttpResponse {
        let body = body.into_inner();
        let method_name = body["params"]["method_name"].as_str().unwrap_or_default();
        let answer = stub.answer(method_name);
        // The view result bytes, wrapped in a CallResult, wrapped in a
        // JSON-RPC 2.0 envelope: the wire shape of a successful `query` call.
        HttpResponse::Ok().json(serde_json::json!({
            "jsonrpc": "2.0",
            "id": body["id"],
            "result": {
                "result": serde_json::to_vec(&answer).unwrap(),
                "logs": [],
                "block_height": 1,
                "block_hash": "11111111111111111111111111111111",
            }
        }))
    }

    /// Serves the stub on an OS-assigned local port and points a client at it.
    pub(crate) fn start_rpc_stub(
        stub: RpcStub,
    ) -> (web::Data<RpcStub>, near_jsonrpc_client::JsonRpcClient) {
        let stub = web::Data::new(stub);
        let endpoint_stub = stub.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(endpoint_stub.clone())
                .default_service(web::post().to(rpc_stub_endpoint))
        })
        .workers(1)
        .disable_signals()
        .bind("127.0.0.1:0")
        .unwrap();
        let addr = server.addrs()[0];
        tokio::spawn(server.run());
        let url = format!("http://{}", addr);
        (stub, near_jsonrpc_client::JsonRpcClient::connect(url.as_str()))
    }
}
