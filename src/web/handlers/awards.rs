use actix_web::{web, HttpResponse, Responder};
use log::{debug, error};

use crate::core::award::AwardRecord;
use crate::core::intervals::compute_extreme_intervals;
use crate::web::server::AppState;
use crate::web::models::{AwardListResponse, ErrorResponse};

/// Get the producers with the shortest and longest gaps between consecutive wins
pub async fn get_longest_fastest_consecutive_awards(data: web::Data<AppState>) -> impl Responder {
    // One snapshot read per request
    let stored = data.repository.lock().await.records();

    match stored {
        Ok(stored) => {
            let records: Vec<AwardRecord> = stored.into_iter().map(|s| s.record).collect();
            let intervals = compute_extreme_intervals(&records);
            debug!(
                "Interval query over {} records: {} min, {} max",
                records.len(),
                intervals.min.len(),
                intervals.max.len()
            );
            HttpResponse::Ok().json(intervals)
        }
        Err(e) => {
            error!("Failed to compute award intervals: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "Unable to compute award intervals",
                "INTERVAL_QUERY_FAILED",
            ))
        }
    }
}

/// List every stored award record
pub async fn list_awards(data: web::Data<AppState>) -> impl Responder {
    let stored = data.repository.lock().await.records();

    match stored {
        Ok(awards) => HttpResponse::Ok().json(AwardListResponse {
            total: awards.len(),
            awards,
        }),
        Err(e) => {
            error!("Failed to list awards: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "Unable to list awards",
                "AWARD_LIST_FAILED",
            ))
        }
    }
}
