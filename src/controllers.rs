pub mod hosts;
pub mod servers;
pub mod stats;
pub mod websites;

use actix_web::web;

use crate::errors::{InventoryError, Result};
use crate::models::StatusReport;
use crate::services::health::health_check;

/// Register every route on an actix `App` or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| InventoryError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| InventoryError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, req| InventoryError::InvalidId(req.path().to_string()).into()),
    )
    .route("/health", web::get().to(health_check))
    .service(
        web::scope("/api")
            .route("/stats", web::get().to(stats::get_stats))
            .service(
                web::scope("/hosts")
                    .route("", web::get().to(hosts::list_hosts))
                    .route("", web::post().to(hosts::create_host))
                    .route("/{id}", web::get().to(hosts::get_host))
                    .route("/{id}", web::put().to(hosts::update_host))
                    .route("/{id}", web::delete().to(hosts::delete_host))
                    .route("/{id}/status", web::post().to(hosts::update_host_status))
                    .route("/{id}/servers", web::get().to(hosts::list_host_servers)),
            )
            .service(
                web::scope("/servers")
                    .route("", web::get().to(servers::list_servers))
                    .route("", web::post().to(servers::create_server))
                    .route("/{id}", web::get().to(servers::get_server))
                    .route("/{id}", web::put().to(servers::update_server))
                    .route("/{id}", web::delete().to(servers::delete_server))
                    .route("/{id}/status", web::post().to(servers::update_server_status))
                    .route("/{id}/websites", web::get().to(servers::list_server_websites)),
            )
            .service(
                web::scope("/websites")
                    .route("", web::get().to(websites::list_websites))
                    .route("", web::post().to(websites::create_website))
                    .route("/{id}", web::get().to(websites::get_website))
                    .route("/{id}", web::put().to(websites::update_website))
                    .route("/{id}", web::delete().to(websites::delete_website))
                    .route("/{id}/status", web::post().to(websites::update_website_status)),
            ),
    );
}

/// Decode a status body; an empty body asks for a simulated check
pub(crate) fn status_report(body: &[u8]) -> Result<StatusReport> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(StatusReport::default());
    }

    serde_json::from_slice(body).map_err(|e| InventoryError::BadRequest(e.to_string()))
}
