use moka::future::Cache;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::models::job::BookingJob;

pub static JOB_CACHE: Lazy<Arc<Cache<Uuid, BookingJob>>> = Lazy::new(|| {
    Arc::new(
        Cache::builder()
            .max_capacity(256)
            .time_to_live(Duration::from_secs(24 * 60 * 60)) // a booking day
            .build(),
    )
});
