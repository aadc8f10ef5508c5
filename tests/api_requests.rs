//! Multi-request flows through the full router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use account_api::api::create_router;
use account_api::app::AppState;
use account_api::domain::{Account, AccountStorage, CreateAccountRequest, DeletedResponse};
use account_api::test_utils::MockAccountStorage;

async fn request_bytes(router: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn create(router: &Router, first: &str, last: &str) -> Account {
    let payload = serde_json::to_string(&CreateAccountRequest::new(first, last)).unwrap();
    let (status, bytes) = request_bytes(router, "POST", "/account", Body::from(payload)).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_full_account_lifecycle_flow() {
    let router = create_router(Arc::new(AppState::new(Arc::new(MockAccountStorage::new()))));

    // 1. POST - create
    let created = create(&router, "Jim", "Smith").await;
    assert_eq!(created.first_name, "Jim");

    // 2. GET by id - same fields verbatim
    let (status, bytes) =
        request_bytes(&router, "GET", &format!("/account/{}", created.id), Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Account = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(fetched, created);

    // 3. GET list - contains it
    let (status, bytes) = request_bytes(&router, "GET", "/account", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let accounts: Vec<Account> = serde_json::from_slice(&bytes).unwrap();
    assert!(accounts.iter().any(|a| a.id == created.id));

    // 4. DELETE
    let (status, bytes) =
        request_bytes(&router, "DELETE", &format!("/account/{}", created.id), Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: DeletedResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(deleted.deleted, created.id);

    // 5. GET by id - now not found
    let (status, bytes) =
        request_bytes(&router, "GET", &format!("/account/{}", created.id), Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], format!("account not found: {}", created.id));
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let router = create_router(Arc::new(AppState::new(Arc::new(MockAccountStorage::new()))));

    let mut ids = Vec::new();
    for i in 0..10 {
        ids.push(create(&router, &format!("First{i}"), "Last").await.id);
    }
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let router = create_router(Arc::new(AppState::new(Arc::new(MockAccountStorage::new()))));
    let created = create(&router, "Jim", "Smith").await;
    create(&router, "Ada", "Lovelace").await;

    let (_, first_list) = request_bytes(&router, "GET", "/account", Body::empty()).await;
    let (_, second_list) = request_bytes(&router, "GET", "/account", Body::empty()).await;
    assert_eq!(first_list, second_list);

    let uri = format!("/account/{}", created.id);
    let (_, first_get) = request_bytes(&router, "GET", &uri, Body::empty()).await;
    let (_, second_get) = request_bytes(&router, "GET", &uri, Body::empty()).await;
    assert_eq!(first_get, second_get);
}

#[tokio::test]
async fn test_transfer_leaves_balances_unchanged() {
    let storage = Arc::new(MockAccountStorage::new());
    let router = create_router(Arc::new(AppState::new(storage.clone())));
    create(&router, "Jim", "Smith").await;
    let target = create(&router, "Ada", "Lovelace").await;
    let before = storage.get_all_accounts().await;

    let payload = format!(r#"{{"toAccount":{},"amount":100}}"#, target.id);
    let (status, bytes) = request_bytes(&router, "POST", "/transfer/", Body::from(payload)).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"toAccount": target.id, "amount": 100}));

    let after = storage.get_accounts().await.unwrap();
    assert_eq!(before, after);
    assert!(after.iter().all(|a| a.balance == 0));
}

#[tokio::test]
async fn test_transfer_to_unknown_account_is_still_echoed() {
    let router = create_router(Arc::new(AppState::new(Arc::new(MockAccountStorage::new()))));

    let (status, bytes) = request_bytes(
        &router,
        "POST",
        "/transfer/",
        Body::from(r#"{"toAccount":999,"amount":5}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["toAccount"], 999);
}
