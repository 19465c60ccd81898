pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use services::auth::{ApiKey, ApiKeyError, extract_api_key};
