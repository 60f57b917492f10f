use serde::Serialize;
use chrono::{DateTime, Utc};

use crate::core::award::StoredAward;

/// Details about the dataset loaded at startup
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub path: String,
    pub loaded_at: DateTime<Utc>,
    pub loaded: usize,
    pub skipped: usize,
}

/// Service status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub dataset: DatasetInfo,
}

/// Stored award listing response
#[derive(Serialize)]
pub struct AwardListResponse {
    pub total: usize,
    pub awards: Vec<StoredAward>,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error: &str, error_code: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            error_code: error_code.to_string(),
        }
    }
}
