use std::net::SocketAddr;
use std::sync::Arc;

use backend_api_contact::client::{ClientError, ContactClient};
use backend_api_contact::config::CorsSettings;
use backend_api_contact::create_app_with_store;
use backend_api_contact::schemas::ContactSubmission;
use backend_api_contact::storage::ContactStore;
use backend_api_contact::test_helpers::{MemoryContactStore, UnavailableContactStore};
use reqwest::StatusCode;
use serde_json::json;

// Serve the app on an ephemeral port and return its address
async fn spawn_app(store: Arc<dyn ContactStore>) -> SocketAddr {
    let app = create_app_with_store(store, &CorsSettings::Disabled);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().unwrap();
    let server = axum::serve(listener, app.into_make_service());
    tokio::spawn(async move { server.await.unwrap(); });
    addr
}

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.into(),
        email: email.into(),
        message: message.into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn submit_returns_stored_record() {
    let store = Arc::new(MemoryContactStore::new());
    let addr = spawn_app(store.clone()).await;
    let client = ContactClient::new(format!("http://{}", addr));

    let mut input = submission("Jo Smith", "jo@example.com", "Please get in touch about our lobby");
    input.company = Some("Acme Interiors".into());
    let contact = client.submit(input).await.expect("submit");

    assert_eq!(contact.name, "Jo Smith");
    assert_eq!(contact.company.as_deref(), Some("Acme Interiors"));
    assert_eq!(contact.phone, None);
    assert_eq!(store.contacts().await, vec![contact]);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_server() {
    let store = Arc::new(MemoryContactStore::new());
    let addr = spawn_app(store.clone()).await;
    let client = ContactClient::new(format!("http://{}", addr));

    let err = client
        .submit(submission("Jo Smith", "a@b.com", "too short"))
        .await
        .unwrap_err();

    match err {
        ClientError::Invalid(errors) => {
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["message"]);
        }
        other => panic!("expected local validation failure, got {other:?}"),
    }
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn server_outage_maps_to_server_error() {
    let addr = spawn_app(Arc::new(UnavailableContactStore)).await;
    let client = ContactClient::new(format!("http://{}", addr));

    let err = client
        .submit(submission("Jo", "a@b.com", "Hello there"))
        .await
        .unwrap_err();

    match err {
        ClientError::Server { status } => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn server_rejection_body_matches_client_error_shape() {
    // A caller that skips local validation still gets per-field detail back.
    let store = Arc::new(MemoryContactStore::new());
    let addr = spawn_app(store.clone()).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/api/contact", addr))
        .json(&json!({ "name": "Jo Smith", "email": "not-an-email", "message": "Hello there, need a quote" }))
        .send()
        .await
        .expect("request failed");
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: backend_api_contact::utils::response::ApiResponse<backend_api_contact::errors::ValidationErrorBody> =
        res.json().await.expect("json");
    let errors = body.data.expect("data").errors;
    assert_eq!(
        errors.get("email"),
        Some(&["Please enter a valid email address".to_string()][..])
    );
    assert_eq!(store.len().await, 0);
}
