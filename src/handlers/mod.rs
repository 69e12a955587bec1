pub mod contact_handler;
pub mod health_handler;
