use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::{info, warn};

use crate::controllers::status_report;
use crate::errors::Result;
use crate::models::{EntityKind, NewWebsite, WebsiteFilter, WebsiteUpdate};
use crate::services::status_check;
use crate::state::AppState;

pub async fn list_websites(
    data: web::Data<AppState>,
    filter: web::Query<WebsiteFilter>,
) -> Result<HttpResponse> {
    info!("Request to list websites");
    let websites = data.store.list_websites(&filter).await?;
    info!("Returning {} websites", websites.len());

    Ok(HttpResponse::Ok().json(websites))
}

pub async fn get_website(data: web::Data<AppState>, id: web::Path<u32>) -> Result<HttpResponse> {
    let website = data.store.get_website(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(website))
}

pub async fn create_website(
    data: web::Data<AppState>,
    website: web::Json<NewWebsite>,
) -> Result<HttpResponse> {
    info!("Request to create website: {}", website.url);
    let website = data.store.create_website(website.into_inner()).await?;

    Ok(HttpResponse::Created().json(website))
}

pub async fn update_website(
    data: web::Data<AppState>,
    id: web::Path<u32>,
    update: web::Json<WebsiteUpdate>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request to update website {}", id);
    let website = data.store.update_website(id, update.into_inner()).await?;

    Ok(HttpResponse::Ok().json(website))
}

pub async fn delete_website(data: web::Data<AppState>, id: web::Path<u32>) -> Result<HttpResponse> {
    let id = id.into_inner();
    info!("Request to remove website {}", id);

    if let Err(e) = data.store.delete_website(id).await {
        warn!("Website {} not removed: {}", id, e);
        return Err(e);
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Website deleted successfully" })))
}

pub async fn update_website_status(
    data: web::Data<AppState>,
    id: web::Path<u32>,
    body: web::Bytes,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    data.store.get_website(id).await?;

    let write = status_check::resolve(EntityKind::Website, status_report(&body)?);
    info!("Recording status {} for website {}", write.status, id);

    data.store.record_website_status(id, write).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Website status updated successfully" })))
}
