use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use paperclip::actix::{web, OpenApiExt};

pub mod backend;
pub mod config;
pub mod errors;
mod modules;
mod rpc_helpers;
pub mod types;
pub mod wallet;

pub(crate) const LOGGER_MSG: &str = "near_action_link_api";

pub type Result<T> = std::result::Result<T, errors::Error>;

fn get_cors(cors_allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::permissive();
    if cors_allowed_origins != ["*".to_string()] {
        for origin in cors_allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![
            actix_web::http::header::AUTHORIZATION,
            actix_web::http::header::ACCEPT,
        ])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600)
}

pub fn start(
    config: config::Config,
    backend_client: backend::BackendClient,
    rpc_client: near_jsonrpc_client::JsonRpcClient,
) {
    let addr = config.addr.clone();
    let cors_allowed_origins = config.cors_allowed_origins.clone();
    let json_payload_max_size = config.limits.input_payload_max_size;

    let prometheus = PrometheusMetricsBuilder::new("near_action_link_api")
        .endpoint("/metrics")
        .build()
        .expect("failed to create the metrics middleware");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(backend_client.clone()))
            .app_data(web::Data::new(rpc_client.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(actix_web_validator::JsonConfig::default().limit(json_payload_max_size))
            .wrap(prometheus.clone())
            .wrap(get_cors(&cors_allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap_api()
            .configure(modules::payment::register_services)
            .configure(modules::deployment::register_services)
            .with_json_spec_at("/api/spec/v2.json")
            .with_json_spec_v3_at("/api/spec/v3.json")
            .build()
    })
    .bind(addr)
    .expect("failed to bind the server address")
    .run();

    tokio::spawn(server);
}
