pub mod booking_config;
pub mod catalog;
pub mod clock;
pub mod credentials;
pub mod job;
pub mod outcome;
pub mod session;
