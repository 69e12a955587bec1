pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod services;
pub mod storage;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
pub mod utils;

pub mod app;

pub use app::{create_app, create_app_with_store};
