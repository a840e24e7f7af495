pub mod auth;
pub mod booking;
pub mod constants;
pub mod portal;
pub mod webdriver;
