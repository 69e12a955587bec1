pub mod contact_routes;
pub mod health_routes;
