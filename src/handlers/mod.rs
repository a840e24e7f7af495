pub mod booking;
pub mod jobs;
