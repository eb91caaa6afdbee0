use axum_test::TestServer;

use shop_mart_api::api::{create_router, AppState};
use shop_mart_api::catalog::CatalogStore;

fn create_test_server() -> TestServer {
    let catalog = CatalogStore::from_seed().unwrap();
    let state = AppState::new(catalog);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_root_status() {
    let server = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "Shop Mart API is running!");
}

#[tokio::test]
async fn test_list_products() {
    let server = create_test_server();
    let response = server.get("/api/products").await;
    response.assert_status_ok();

    let products: Vec<serde_json::Value> = response.json();
    assert_eq!(products.len(), 8);
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["name"], "Classic Denim Jacket");
    // Wire format keeps the storefront's camelCase image field
    assert!(products[0]["imageUrl"].is_string());
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = create_test_server();
    let response = server.get("/api/products/5").await;
    response.assert_status_ok();

    let product: serde_json::Value = response.json();
    assert_eq!(product["id"], 5);
    assert_eq!(product["name"], "Wool Scarf");
    assert_eq!(product["category"], "Accessories");
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let server = create_test_server();
    let response = server.get("/api/products/999").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_get_user_by_id() {
    let server = create_test_server();
    let response = server.get("/api/users/2").await;
    response.assert_status_ok();

    let user: serde_json::Value = response.json();
    assert_eq!(user["id"], 2);
    assert_eq!(user["name"], "Maria Garcia");
    assert_eq!(user["email"], "maria@example.com");
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let server = create_test_server();
    let response = server.get("/api/users/999").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_user_recommendations_shape() {
    let server = create_test_server();
    let response = server.get("/api/recommendations/1").await;
    response.assert_status_ok();

    let bundle: serde_json::Value = response.json();
    let sections = bundle.as_object().unwrap();
    assert_eq!(sections.len(), 2);

    let for_you = bundle["for_you"].as_array().unwrap();
    let trending = bundle["trending"].as_array().unwrap();
    assert_eq!(for_you.len(), 8);
    assert_eq!(trending.len(), 8);

    // Trending is the catalog prefix, in order
    let trending_ids: Vec<u64> = trending.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(trending_ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    // Personalized picks never repeat a product
    let mut for_you_ids: Vec<u64> = for_you.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    for_you_ids.sort_unstable();
    for_you_ids.dedup();
    assert_eq!(for_you_ids.len(), 8);
}

#[tokio::test]
async fn test_user_recommendations_unknown_user_returns_404() {
    let server = create_test_server();
    let response = server.get("/api/recommendations/999").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_product_recommendations_exclude_queried_product() {
    let server = create_test_server();

    for _ in 0..20 {
        let response = server.get("/api/recommendations/product/3").await;
        response.assert_status_ok();

        let bundle: serde_json::Value = response.json();
        let sections = bundle.as_object().unwrap();
        assert_eq!(sections.len(), 1);

        let also_bought = bundle["also_bought"].as_array().unwrap();
        assert!(also_bought.len() <= 4);
        assert!(also_bought.iter().all(|p| p["id"] != 3));
    }
}

#[tokio::test]
async fn test_product_recommendations_accept_user_id_query() {
    let server = create_test_server();
    let response = server
        .get("/api/recommendations/product/1")
        .add_query_param("user_id", 2)
        .await;
    response.assert_status_ok();

    let bundle: serde_json::Value = response.json();
    assert!(bundle["also_bought"].is_array());
}

#[tokio::test]
async fn test_product_recommendations_tolerate_unknown_user() {
    // An unrecognized user degrades to the default user instead of failing
    let server = create_test_server();
    let response = server
        .get("/api/recommendations/product/1")
        .add_query_param("user_id", 999)
        .await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_product_recommendations_unknown_product_returns_404() {
    let server = create_test_server();
    let response = server.get("/api/recommendations/product/999").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn test_request_id_echoed_on_response() {
    let server = create_test_server();
    let response = server.get("/api/products").await;
    response.assert_status_ok();
    assert!(response.maybe_header("x-request-id").is_some());
}
