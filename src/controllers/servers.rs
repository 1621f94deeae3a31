use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{info, warn};

use crate::controllers::status_report;
use crate::errors::Result;
use crate::models::{EntityKind, NewServer, ServerFilter, ServerUpdate};
use crate::services::status_check;
use crate::state::AppState;

pub async fn list_servers(
    data: web::Data<AppState>,
    filter: web::Query<ServerFilter>,
) -> Result<HttpResponse> {
    info!("Request to list servers");
    let servers = data.store.list_servers(&filter).await?;
    info!("Returning {} servers", servers.len());

    Ok(HttpResponse::Ok().json(servers))
}

pub async fn get_server(data: web::Data<AppState>, id: web::Path<u32>) -> Result<HttpResponse> {
    let server = data.store.get_server(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(server))
}

pub async fn create_server(
    data: web::Data<AppState>,
    server: web::Json<NewServer>,
) -> Result<HttpResponse> {
    info!(
        "Request to create server {} on host {}",
        server.name, server.host_id
    );
    let server = data.store.create_server(server.into_inner()).await?;

    Ok(HttpResponse::Created().json(server))
}

pub async fn update_server(
    data: web::Data<AppState>,
    id: web::Path<u32>,
    update: web::Json<ServerUpdate>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request to update server {}", id);
    let server = data.store.update_server(id, update.into_inner()).await?;

    Ok(HttpResponse::Ok().json(server))
}

// Remove a server; refused while websites are served from it
pub async fn delete_server(data: web::Data<AppState>, id: web::Path<u32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request to remove server {}", id);

    if let Err(e) = data.store.delete_server(id).await {
        warn!("Server {} not removed: {}", id, e);
        return Err(e);
    }

    info!("Server {} removed", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Server deleted successfully" })))
}

pub async fn update_server_status(
    data: web::Data<AppState>,
    id: web::Path<u32>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    data.store.get_server(id).await?;

    let write = status_check::resolve(EntityKind::Server, status_report(&body)?);
    info!("Recording status {} for server {}", write.status, id);

    data.store.record_server_status(id, write).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Server status updated successfully" })))
}

pub async fn list_server_websites(
    data: web::Data<AppState>,
    id: web::Path<u32>,
) -> Result<HttpResponse> {
    let websites = data.store.websites_by_server(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(websites))
}
