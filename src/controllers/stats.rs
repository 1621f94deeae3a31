use actix_web::{HttpResponse, web};
use tracing::info;

use crate::errors::Result;
use crate::state::AppState;

// Aggregate counts by status for the stats panel
pub async fn get_stats(data: web::Data<AppState>) -> Result<HttpResponse> {
    info!("Request for dashboard stats");
    let stats = data.store.stats().await?;

    Ok(HttpResponse::Ok().json(stats))
}
