use paperclip::actix::web;

mod data_provider;
mod resources;
mod schemas;

pub(crate) fn register_services(app: &mut web::ServiceConfig) {
    app.service(
        web::resource("/action/deployment/{uuid}")
            .route(web::get().to(resources::get_deployment_action)),
    );
}
