//! HTTP handlers and route configuration.

mod communities;
pub mod respond;
mod root;


use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(root::root))
        .service(
            web::resource("/communities")
                .route(web::post().to(communities::create_community))
                .route(web::get().to(communities::list_communities))
                .default_service(web::to(root::not_found)),
        )
        .service(
            web::resource("/communities/{id}")
                .route(web::get().to(communities::get_community))
                .route(web::put().to(communities::update_community))
                .route(web::delete().to(communities::delete_community))
                .default_service(web::to(root::not_found)),
        )
        .default_service(web::to(root::not_found));
}
