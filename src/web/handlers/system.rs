use actix_web::{web, HttpResponse, Responder};
use log::error;

use crate::web::server::AppState;
use crate::web::models::{ErrorResponse, StatusResponse};

/// Get the service status and the loaded dataset summary
pub async fn get_status(data: web::Data<AppState>) -> impl Responder {
    let count = data.repository.lock().await.count();

    match count {
        Ok(records) => HttpResponse::Ok().json(StatusResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            dataset: data.dataset.clone(),
        }),
        Err(e) => {
            error!("Failed to read award count: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "Unable to read service status",
                "STATUS_UNAVAILABLE",
            ))
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::new("Resource not found", "NOT_FOUND"))
}
