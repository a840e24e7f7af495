pub mod automation;
pub mod cache;
pub mod config_source;
pub mod console;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod settings;
