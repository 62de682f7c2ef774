use paperclip::actix::web;

mod data_provider;
mod resources;
mod schemas;

pub(crate) fn register_services(app: &mut web::ServiceConfig) {
    app.service(
        web::resource("/action/payment/{uuid}")
            .route(web::get().to(resources::get_payment_action)),
    )
    .service(
        web::resource("/action/payment/{uuid}/payload")
            .route(web::get().to(resources::get_payment_payload)),
    )
    .service(
        web::resource("/payment-requests")
            .route(web::post().to(resources::create_payment_request)),
    );
}
