//! E2E tests for the static dashboard page

mod common;

use std::sync::Arc;

use common::{TestServer, UnreachableStore};

#[tokio::test]
async fn test_root_serves_the_dashboard_page() {
    let server = TestServer::new().await;

    let response = server.client.get(&server.url("/")).send().await.unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("US School Donations"));
}

#[tokio::test]
async fn test_root_body_is_stable_across_requests() {
    let server = TestServer::new().await;

    let first = server
        .client
        .get(&server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let second = server
        .client
        .get(&server.url("/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_root_does_not_depend_on_the_store() {
    let server = TestServer::with_store(Arc::new(UnreachableStore)).await;

    let response = server.client.get(&server.url("/")).send().await.unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/static/js/graph.js"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("/donorsUS/projects"));
}

#[tokio::test]
async fn test_missing_asset_returns_404() {
    let server = TestServer::new().await;

    let response = server
        .client
        .get(&server.url("/static/js/no-such-file.js"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
