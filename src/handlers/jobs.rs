use crate::cache::JOB_CACHE;
use crate::models::job::BookingJob;
use uuid::Uuid;

pub async fn get_job(id: Uuid) -> Option<BookingJob> {
    JOB_CACHE.get(&id).await
}

pub async fn all_jobs() -> Vec<BookingJob> {
    let mut jobs: Vec<_> = JOB_CACHE.iter().map(|entry| entry.1.clone()).collect();
    jobs.sort_by_key(|job| job.started_at);
    jobs
}
