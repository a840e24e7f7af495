use crate::models::booking_config::BookingConfig;
use crate::models::outcome::BookingReport;
use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobStatus {
    Running,
    Finished { report: BookingReport },
    Failed { error: String },
}

/// A booking run started over HTTP.
#[derive(Debug, Clone, Serialize)]
pub struct BookingJob {
    pub id: Uuid,
    pub config: BookingConfig,
    pub started_at: DateTime<Local>,
    pub status: JobStatus,
}

impl BookingJob {
    pub fn new(config: BookingConfig) -> Self {
        BookingJob {
            id: Uuid::new_v4(),
            config,
            started_at: Local::now(),
            status: JobStatus::Running,
        }
    }
}
