//! HTTP API 集成测试
//!
//! 用内存 SQLite 构建完整路由，通过 `tower::ServiceExt::oneshot`
//! 逐请求驱动，不监听端口。

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use zedcart_server::core::{Config, ServerState, build_router};

async fn test_state() -> ServerState {
    let config = Config::with_overrides(":memory:", 0);
    ServerState::initialize_in_memory(&config)
        .await
        .expect("Failed to initialize test state")
}

async fn test_app() -> (Router, ServerState) {
    let state = test_state().await;
    (build_router(state.clone()), state)
}

fn admin_token(state: &ServerState) -> String {
    state
        .jwt_service
        .generate_token("admin", "admin")
        .expect("Failed to mint admin token")
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}

async fn create_order(app: &Router, token: &str, name: &str) -> String {
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/orders",
            Some(token),
            Some(json!({
                "name": name,
                "email": "a@b.com",
                "phone": "123",
                "pickup": "Lagos",
                "delivery": "Abuja",
                "weight": "5 kg",
                "description": null
            })),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["tracking_id"]
        .as_str()
        .expect("tracking_id missing")
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let (app, _state) = test_app().await;

    let response = app
        .oneshot(request("GET", "/health", None, None))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let (app, _state) = test_app().await;

    for (method, uri) in [
        ("GET", "/api/admin/quotes"),
        ("GET", "/api/admin/orders"),
        ("GET", "/api/admin/announcements"),
        ("GET", "/api/admin/stats"),
        ("DELETE", "/api/admin/gallery/1"),
    ] {
        let response = app
            .clone()
            .oneshot(request(method, uri, None, None))
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let (app, _state) = test_app().await;

    let response = app
        .oneshot(request(
            "GET",
            "/api/admin/quotes",
            Some("not-a-jwt"),
            None,
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_flow() {
    let (app, _state) = test_app().await;

    // Wrong password: unified message, 400
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "admin", "password": "nope"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");

    // Unknown username: same message
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "root", "password": "admin123"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");

    // Default dev credentials work and the issued token opens admin routes
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"username": "admin", "password": "admin123"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "admin");
    let token = body["token"].as_str().expect("token missing").to_string();

    let response = app
        .oneshot(request("GET", "/api/admin/quotes", Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_quote_round_trip() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/quotes",
            None,
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "0700000000",
                "pickup": "Lagos",
                "delivery": "Kano",
                "weight": "12 kg"
            })),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Quote request submitted successfully");

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/quotes", Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let quotes = body.as_array().expect("Expected array");
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0]["name"], "Ada");
    assert_eq!(quotes[0]["weight"], "12 kg");
    assert_eq!(quotes[0]["status"], "Pending");
    assert!(quotes[0]["description"].is_null());

    // Delete, then a second delete reports 404
    let id = quotes[0]["id"].as_i64().expect("id missing");
    let uri = format!("/api/admin/quotes/{}", id);
    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Quote deleted");

    let response = app
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Quote not found");
}

#[tokio::test]
async fn test_malformed_ids_are_rejected() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    for (method, uri) in [
        ("DELETE", "/api/admin/quotes/abc"),
        ("DELETE", "/api/admin/gallery/abc"),
        ("DELETE", "/api/admin/announcements/abc"),
        ("DELETE", "/api/admin/orders/abc"),
    ] {
        let response = app
            .clone()
            .oneshot(request(method, uri, Some(&token), None))
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", method, uri);
    }

    // PATCH bodies still parse, the id check fires first
    let response = app
        .oneshot(request(
            "PATCH",
            "/api/admin/orders/abc",
            Some(&token),
            Some(json!({"status": "Delivered"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid order ID");
}

#[tokio::test]
async fn test_order_create_and_track() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    let tracking_id = create_order(&app, &token, "Bola").await;
    assert!(tracking_id.starts_with("ZC-"));
    assert_eq!(tracking_id.len(), 11);

    // Public tracking returns the full order row, no auth needed
    let uri = format!("/api/track/{}", tracking_id);
    let response = app
        .clone()
        .oneshot(request("GET", &uri, None, None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let tracked = body_json(response).await;
    assert_eq!(tracked["tracking_id"], tracking_id.as_str());
    assert_eq!(tracked["name"], "Bola");
    assert_eq!(tracked["status"], "Pending");

    // Admin list returns the identical record, field for field
    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/orders", Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let orders = body.as_array().expect("Expected array");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0], tracked);

    // Unknown tracking id
    let response = app
        .oneshot(request("GET", "/api/track/ZC-NOPE0000", None, None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Parcel not found");
}

#[tokio::test]
async fn test_order_status_update_is_free_text() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    let tracking_id = create_order(&app, &token, "Chi").await;

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/orders", Some(&token), None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    let id = body[0]["id"].as_i64().expect("id missing");

    // Any string is accepted, including words outside the UI vocabulary
    let uri = format!("/api/admin/orders/{}", id);
    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            &uri,
            Some(&token),
            Some(json!({"status": "Lost in transit"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Order status updated");

    let uri = format!("/api/track/{}", tracking_id);
    let response = app
        .clone()
        .oneshot(request("GET", &uri, None, None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    assert_eq!(body["status"], "Lost in transit");

    // Missing order id
    let response = app
        .oneshot(request(
            "PATCH",
            "/api/admin/orders/9999",
            Some(&token),
            Some(json!({"status": "Delivered"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn test_order_delete_removes_tracking() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    let tracking_id = create_order(&app, &token, "Dele").await;

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/orders", Some(&token), None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    let id = body[0]["id"].as_i64().expect("id missing");

    let uri = format!("/api/admin/orders/{}", id);
    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Order deleted");

    // A second delete reports 404
    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Order not found");

    // Tracking a deleted order is indistinguishable from a never-existing one
    let uri = format!("/api/track/{}", tracking_id);
    let response = app
        .oneshot(request("GET", &uri, None, None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Parcel not found");
}

#[tokio::test]
async fn test_reviews() {
    let (app, _state) = test_app().await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/reviews",
            None,
            Some(json!({"name": "Efe", "rating": 5, "comment": "Fast delivery"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Review submitted");

    let response = app
        .oneshot(request("GET", "/api/reviews", None, None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let reviews = body.as_array().expect("Expected array");
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["rating"], 5);
    assert_eq!(reviews[0]["comment"], "Fast delivery");
}

#[tokio::test]
async fn test_gallery_crud() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/gallery",
            Some(&token),
            Some(json!({"image_data": "data:image/png;base64,AAAA", "caption": "Warehouse"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Image added to gallery");

    // Public list, no auth
    let response = app
        .clone()
        .oneshot(request("GET", "/api/gallery", None, None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let items = body.as_array().expect("Expected array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["caption"], "Warehouse");
    let id = items[0]["id"].as_i64().expect("id missing");

    let uri = format!("/api/admin/gallery/{}", id);
    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Image deleted from gallery");

    let response = app
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Image not found in gallery");
}

#[tokio::test]
async fn test_announcement_active_filter() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    // "type" defaults to info when absent
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/admin/announcements",
            Some(&token),
            Some(json!({"message": "Holiday schedule"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Announcement created");

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/announcements", Some(&token), None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    let all = body.as_array().expect("Expected array");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["type"], "info");
    assert_eq!(all[0]["active"], true);
    let id = all[0]["id"].as_i64().expect("id missing");

    // Deactivate via full-replace PATCH
    let uri = format!("/api/admin/announcements/{}", id);
    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            &uri,
            Some(&token),
            Some(json!({"message": "Holiday schedule", "type": "warning", "active": false})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Announcement updated");

    // Public list hides it, admin list keeps it
    let response = app
        .clone()
        .oneshot(request("GET", "/api/announcements", None, None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    assert_eq!(body.as_array().expect("Expected array").len(), 0);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/announcements", Some(&token), None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    let all = body.as_array().expect("Expected array");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["type"], "warning");
    assert_eq!(all[0]["active"], false);

    // PATCH on a missing id
    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            "/api/admin/announcements/9999",
            Some(&token),
            Some(json!({"message": "x", "type": "info", "active": true})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Delete, then a second delete reports 404
    let response = app
        .clone()
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Announcement deleted");

    let response = app
        .oneshot(request("DELETE", &uri, Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Announcement not found");
}

#[tokio::test]
async fn test_announcement_requires_message() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    let response = app
        .oneshot(request(
            "POST",
            "/api/admin/announcements",
            Some(&token),
            Some(json!({"message": "   ", "type": "info"})),
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn test_stats_counts() {
    let (app, state) = test_app().await;
    let token = admin_token(&state);

    // 3 orders: two stay Pending, one becomes Delivered
    create_order(&app, &token, "One").await;
    create_order(&app, &token, "Two").await;
    create_order(&app, &token, "Three").await;

    let response = app
        .clone()
        .oneshot(request("GET", "/api/admin/orders", Some(&token), None))
        .await
        .expect("Request failed");
    let body = body_json(response).await;
    let id = body[0]["id"].as_i64().expect("id missing");

    let uri = format!("/api/admin/orders/{}", id);
    let response = app
        .clone()
        .oneshot(request(
            "PATCH",
            &uri,
            Some(&token),
            Some(json!({"status": "Delivered"})),
        ))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    // 2 quotes
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/quotes",
                None,
                Some(json!({
                    "name": "Q",
                    "email": "q@q.com",
                    "phone": "1",
                    "pickup": "A",
                    "delivery": "B",
                    "weight": "1 kg"
                })),
            ))
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(request("GET", "/api/admin/stats", Some(&token), None))
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalOrders"], 3);
    assert_eq!(body["pendingOrders"], 2);
    assert_eq!(body["deliveredOrders"], 1);
    assert_eq!(body["totalQuotes"], 2);
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let (app, _state) = test_app().await;

    // 11 MB caption blows past the 10 MB body cap
    let big = "x".repeat(11 * 1024 * 1024);
    let response = app
        .oneshot(request(
            "POST",
            "/api/reviews",
            None,
            Some(json!({"name": "Big", "rating": 1, "comment": big})),
        ))
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
