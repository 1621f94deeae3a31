use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{info, warn};

use crate::controllers::status_report;
use crate::errors::Result;
use crate::models::{EntityKind, HostFilter, HostUpdate, NewHost};
use crate::services::status_check;
use crate::state::AppState;

// List hosts, narrowed by the dashboard's search and filters
pub async fn list_hosts(
    data: web::Data<AppState>,
    filter: web::Query<HostFilter>,
) -> Result<HttpResponse> {
    info!("Request to list hosts");
    let hosts = data.store.list_hosts(&filter).await?;
    info!("Returning {} hosts", hosts.len());

    Ok(HttpResponse::Ok().json(hosts))
}

pub async fn get_host(data: web::Data<AppState>, id: web::Path<u32>) -> Result<HttpResponse> {
    let host = data.store.get_host(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(host))
}

pub async fn create_host(
    data: web::Data<AppState>,
    host: web::Json<NewHost>,
) -> Result<HttpResponse> {
    info!("Request to create host: {}", host.hostname);
    let host = data.store.create_host(host.into_inner()).await?;

    Ok(HttpResponse::Created().json(host))
}

pub async fn update_host(
    data: web::Data<AppState>,
    id: web::Path<u32>,
    update: web::Json<HostUpdate>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request to update host {}", id);
    let host = data.store.update_host(id, update.into_inner()).await?;

    Ok(HttpResponse::Ok().json(host))
}

// Remove a host; refused while servers still run on it
pub async fn delete_host(data: web::Data<AppState>, id: web::Path<u32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request to remove host {}", id);

    if let Err(e) = data.store.delete_host(id).await {
        warn!("Host {} not removed: {}", id, e);
        return Err(e);
    }

    info!("Host {} removed", id);
    Ok(HttpResponse::Ok().json(json!({ "message": "Host deleted successfully" })))
}

// Record a client-supplied or simulated status check
pub async fn update_host_status(
    data: web::Data<AppState>,
    id: web::Path<u32>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    data.store.get_host(id).await?;

    let write = status_check::resolve(EntityKind::Host, status_report(&body)?);
    info!("Recording status {} for host {}", write.status, id);

    data.store.record_host_status(id, write).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Host status updated successfully" })))
}

pub async fn list_host_servers(
    data: web::Data<AppState>,
    id: web::Path<u32>,
) -> Result<HttpResponse> {
    let servers = data.store.servers_by_host(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(servers))
}
