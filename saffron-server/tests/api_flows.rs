//! End-to-end API flows driven through the router without a network stack.
//!
//! Uses the in-memory SurrealDB engine, so every test runs against a fresh
//! isolated database.

use axum::Router;
use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

use saffron_server::auth::jwt::JwtConfig;
use saffron_server::core::{Config, ServerState};
use saffron_server::db::DbService;
use saffron_server::{OneshotRouter, build_app};

const ADMIN_EMAIL: &str = "admin@saffron.local";
const ADMIN_PASSWORD: &str = "saffron-dev-password";

async fn test_state(work_dir: &str) -> ServerState {
    let db = Surreal::new::<Mem>(()).await.expect("open mem db");
    let db = DbService::from_connection(db).await.expect("select ns").db;

    let mut config = Config::with_overrides(work_dir, 0);
    config.admin_email = ADMIN_EMAIL.to_string();
    config.admin_password = ADMIN_PASSWORD.to_string();
    config.jwt = JwtConfig {
        secret: "integration-test-secret-integration-test".to_string(),
        expiration_minutes: 60,
        issuer: "saffron-server".to_string(),
        audience: "saffron-site".to_string(),
    };

    let state = ServerState::with_db(config, db);
    state.bootstrap_admin().await.expect("bootstrap admin");
    state
}

struct TestApp {
    app: Router<ServerState>,
    state: ServerState,
}

impl TestApp {
    async fn new() -> Self {
        let state = test_state("/tmp/saffron-test-unused").await;
        Self {
            app: build_app(&state),
            state,
        }
    }

    async fn with_work_dir(work_dir: &str) -> Self {
        let state = test_state(work_dir).await;
        Self {
            app: build_app(&state),
            state,
        }
    }

    async fn request(
        &mut self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&value).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .app
            .oneshot(&self.state, request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn raw_request(&mut self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .app
            .oneshot(&self.state, request)
            .await
            .expect("request failed");
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn login(&mut self) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().expect("token in response").to_string()
    }
}

fn future_date(days: i64) -> String {
    (Utc::now().date_naive() + Duration::days(days)).to_string()
}

// ========================================================================
// Health & auth
// ========================================================================

#[tokio::test]
async fn test_health_is_public() {
    let mut app = TestApp::new().await;
    let (status, body) = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_and_me() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    let (status, body) = app
        .request(Method::GET, "/api/auth/me", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], ADMIN_EMAIL);
    assert_eq!(body["role"], "admin");
    assert_eq!(body["is_active"], true);

    let (status, _) = app
        .request(Method::POST, "/api/auth/logout", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let mut app = TestApp::new().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": ADMIN_EMAIL, "password": "wrong-password"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // Unified message, no enumeration hint
    assert_eq!(body["error"], "Invalid email or password");

    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({"email": "nobody@saffron.local", "password": "whatever-123"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    let mut app = TestApp::new().await;

    let (status, _) = app.request(Method::GET, "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(Method::GET, "/api/orders", Some("not-a-real-token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(Method::GET, "/api/stats/dashboard", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Public surfaces stay open
    let (status, _) = app.request(Method::GET, "/api/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .request(Method::GET, "/api/banners?active=true", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
}

// ========================================================================
// Menu CRUD
// ========================================================================

fn menu_item(name: &str, category: &str, price: f64, featured: bool) -> Value {
    json!({
        "name": name,
        "description": format!("{name} fresh from the kitchen"),
        "price": price,
        "category": category,
        "image": "https://images.example.com/dish.jpg",
        "featured": featured,
        "dietary": ["vegetarian"],
    })
}

#[tokio::test]
async fn test_menu_crud_flow() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    // Create
    let (status, created) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Bruschetta", "starters", 8.99, true)),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "create failed: {created}");
    let id = created["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("menu_item:"));

    // Duplicate name -> 409
    let (status, _) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Bruschetta", "starters", 8.99, false)),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Unknown category -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Weird", "specials", 5.0, false)),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Public listing sees it
    let (status, listing) = app.request(Method::GET, "/api/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["name"], "Bruschetta");

    // Category filter
    let (_, starters) = app
        .request(Method::GET, "/api/menu?category=starters", None, None)
        .await;
    assert_eq!(starters.as_array().unwrap().len(), 1);
    let (_, desserts) = app
        .request(Method::GET, "/api/menu?category=desserts", None, None)
        .await;
    assert!(desserts.as_array().unwrap().is_empty());

    // Featured endpoint
    let (_, featured) = app
        .request(Method::GET, "/api/menu/featured", None, None)
        .await;
    assert_eq!(featured.as_array().unwrap().len(), 1);

    // Update price and take off the featured list
    let (status, updated) = app
        .request(
            Method::PUT,
            &format!("/api/menu/{id}"),
            Some(&token),
            Some(json!({"price": 9.5, "featured": false})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "update failed: {updated}");
    assert_eq!(updated["featured"], false);
    assert!((updated["price"].as_f64().unwrap() - 9.5).abs() < 1e-6);

    let (_, featured) = app
        .request(Method::GET, "/api/menu/featured", None, None)
        .await;
    assert!(featured.as_array().unwrap().is_empty());

    // Mark unavailable: hidden from public menu, still in /all
    let (status, _) = app
        .request(
            Method::PUT,
            &format!("/api/menu/{id}"),
            Some(&token),
            Some(json!({"is_available": false})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = app.request(Method::GET, "/api/menu", None, None).await;
    assert!(listing.as_array().unwrap().is_empty());
    let (_, all) = app
        .request(Method::GET, "/api/menu/all", Some(&token), None)
        .await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    // Delete
    let (status, _) = app
        .request(Method::DELETE, &format!("/api/menu/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/menu/{id}"), Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========================================================================
// Banners
// ========================================================================

#[tokio::test]
async fn test_banner_flow() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    let (status, banner) = app
        .request(
            Method::POST,
            "/api/banners",
            Some(&token),
            Some(json!({
                "image": "https://images.example.com/hero.jpg",
                "title": "Welcome to Our Restaurant",
                "description": "Experience the finest dining in town",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {banner}");
    assert_eq!(banner["active"], true);
    let id = banner["id"].as_str().unwrap().to_string();

    // Toggle off
    let (status, toggled) = app
        .request(
            Method::POST,
            &format!("/api/banners/{id}/toggle"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["active"], false);

    // Carousel (active only) is now empty, admin listing still sees it
    let (_, carousel) = app
        .request(Method::GET, "/api/banners?active=true", None, None)
        .await;
    assert!(carousel.as_array().unwrap().is_empty());
    let (_, all) = app.request(Method::GET, "/api/banners", None, None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    // Update title
    let (status, updated) = app
        .request(
            Method::PUT,
            &format!("/api/banners/{id}"),
            Some(&token),
            Some(json!({"title": "Try Our Special Menu"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Try Our Special Menu");

    // Missing title -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/banners",
            Some(&token),
            Some(json!({"image": "https://images.example.com/x.jpg", "title": "", "description": ""})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/banners/{id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

// ========================================================================
// Reservations
// ========================================================================

fn booking(email: &str, date: String, time: &str) -> Value {
    json!({
        "name": "Amit Kumar",
        "email": email,
        "phone": "+49 30 1234567",
        "date": date,
        "time": time,
        "guests": 4,
        "occasion": "Birthday",
    })
}

#[tokio::test]
async fn test_reservation_booking_and_status_flow() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    // Book - public
    let (status, reservation) = app
        .request(
            Method::POST,
            "/api/reservations/book",
            None,
            Some(booking("amit@example.com", future_date(3), "19:00")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "booking failed: {reservation}");
    assert_eq!(reservation["status"], "pending");
    let id = reservation["id"].as_str().unwrap().to_string();

    // Same guest, same slot -> 409
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/book",
            None,
            Some(booking("amit@example.com", future_date(3), "19:00")),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Off-slot time -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/book",
            None,
            Some(booking("mira@example.com", future_date(3), "15:00")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Past date -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/book",
            None,
            Some(booking("mira@example.com", future_date(-2), "19:00")),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Confirm
    let (status, confirmed) = app
        .request(
            Method::POST,
            "/api/reservations/update-status",
            Some(&token),
            Some(json!({"reservation_id": id, "status": "confirmed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "confirm failed: {confirmed}");
    assert_eq!(confirmed["status"], "confirmed");

    // Illegal transition back to pending -> 422
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/update-status",
            Some(&token),
            Some(json!({"reservation_id": id, "status": "pending"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Complete, then any further change is illegal
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/update-status",
            Some(&token),
            Some(json!({"reservation_id": id, "status": "completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/update-status",
            Some(&token),
            Some(json!({"reservation_id": id, "status": "cancelled"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Unknown reservation -> 404
    let (status, _) = app
        .request(
            Method::POST,
            "/api/reservations/update-status",
            Some(&token),
            Some(json!({"reservation_id": "reservation:missing", "status": "confirmed"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reservation_window_and_purge() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    for (email, time) in [("a@example.com", "18:00"), ("b@example.com", "19:30")] {
        let (status, _) = app
            .request(
                Method::POST,
                "/api/reservations/book",
                None,
                Some(booking(email, future_date(5), time)),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Window listing with status filter
    let (status, listing) = app
        .request(
            Method::GET,
            "/api/reservations/all?last_num_hours=24&status=pending",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 2);

    let (_, none) = app
        .request(
            Method::GET,
            "/api/reservations/all?status=confirmed",
            Some(&token),
            None,
        )
        .await;
    assert!(none.as_array().unwrap().is_empty());

    // Purge everything older than 0 hours (records are ~1s old after the wait)
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let (status, purged) = app
        .request(
            Method::DELETE,
            "/api/reservations/delete?hours=0",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "purge failed: {purged}");
    assert_eq!(purged["deleted"], 2);

    let (_, listing) = app
        .request(Method::GET, "/api/reservations/all", Some(&token), None)
        .await;
    assert!(listing.as_array().unwrap().is_empty());
}

// ========================================================================
// Orders
// ========================================================================

#[tokio::test]
async fn test_order_placement_and_status_flow() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    let (_, pasta) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Signature Pasta", "main", 13.20, false)),
        )
        .await;
    let (_, cake) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Chocolate Lava Cake", "desserts", 10.99, false)),
        )
        .await;
    let pasta_id = pasta["id"].as_str().unwrap().to_string();
    let cake_id = cake["id"].as_str().unwrap().to_string();

    // Place order - public
    let (status, order) = app
        .request(
            Method::POST,
            "/api/orders/place",
            None,
            Some(json!({
                "customer": {
                    "name": "Vikram Malhotra",
                    "email": "vikram@example.com",
                    "phone": "+34612345678",
                },
                "items": [
                    {"menu_item": pasta_id, "quantity": 2},
                    {"menu_item": cake_id, "quantity": 1},
                ],
                "note": "No garlic please",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "place failed: {order}");
    assert_eq!(order["status"], "processing");
    // 2 * 13.20 + 10.99 = 37.39, computed server-side
    assert!((order["total"].as_f64().unwrap() - 37.39).abs() < 1e-6);
    let order_id = order["id"].as_str().unwrap().to_string();

    // Unknown menu item -> 404
    let (status, _) = app
        .request(
            Method::POST,
            "/api/orders/place",
            None,
            Some(json!({
                "customer": {
                    "name": "Vikram Malhotra",
                    "email": "vikram@example.com",
                    "phone": "+34612345678",
                },
                "items": [{"menu_item": "menu_item:missing", "quantity": 1}],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Empty order -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/orders/place",
            None,
            Some(json!({
                "customer": {
                    "name": "Vikram Malhotra",
                    "email": "vikram@example.com",
                    "phone": "+34612345678",
                },
                "items": [],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Public tracking by id
    let (status, tracked) = app
        .request(Method::GET, &format!("/api/orders/{order_id}"), None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tracked["items"].as_array().unwrap().len(), 2);

    // Line snapshots survive a menu delete
    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/menu/{cake_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, tracked) = app
        .request(Method::GET, &format!("/api/orders/{order_id}"), None, None)
        .await;
    assert_eq!(tracked["items"][1]["name"], "Chocolate Lava Cake");

    // Admin listing
    let (status, listing) = app
        .request(Method::GET, "/api/orders", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 1);

    // Complete, then no further transitions
    let (status, completed) = app
        .request(
            Method::POST,
            "/api/orders/update-status",
            Some(&token),
            Some(json!({"order_id": order_id, "status": "completed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(completed["status"], "completed");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/orders/update-status",
            Some(&token),
            Some(json!({"order_id": order_id, "status": "cancelled"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_order_rejects_unavailable_item() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    let (_, dish) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Grilled Salmon", "main", 24.99, false)),
        )
        .await;
    let dish_id = dish["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .request(
            Method::PUT,
            &format!("/api/menu/{dish_id}"),
            Some(&token),
            Some(json!({"is_available": false})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .request(
            Method::POST,
            "/api/orders/place",
            None,
            Some(json!({
                "customer": {
                    "name": "Sneha Reddy",
                    "email": "sneha@example.com",
                    "phone": "+34698765432",
                },
                "items": [{"menu_item": dish_id, "quantity": 1}],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ========================================================================
// Feedback & subscribe
// ========================================================================

#[tokio::test]
async fn test_feedback_flow() {
    let mut app = TestApp::new().await;

    let (status, review) = app
        .request(
            Method::POST,
            "/api/feedback",
            None,
            Some(json!({
                "name": "Priya Patel",
                "email": "priya@example.com",
                "rating": 4,
                "comment": "Lovely evening, the risotto was superb.",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "feedback failed: {review}");

    // Out-of-range rating -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/feedback",
            None,
            Some(json!({
                "name": "Priya Patel",
                "email": "priya@example.com",
                "rating": 6,
                "comment": "Too good to rate",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, listing) = app.request(Method::GET, "/api/feedback", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 1);
    assert_eq!(listing[0]["rating"], 4);
}

#[tokio::test]
async fn test_subscribe_flow() {
    let mut app = TestApp::new().await;

    let (status, _) = app
        .request(
            Method::POST,
            "/api/subscribe",
            None,
            Some(json!({"email": "friend@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // Duplicate -> 409
    let (status, _) = app
        .request(
            Method::POST,
            "/api/subscribe",
            None,
            Some(json!({"email": "friend@example.com"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Bad email -> 400
    let (status, _) = app
        .request(
            Method::POST,
            "/api/subscribe",
            None,
            Some(json!({"email": "not-an-email"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ========================================================================
// Dashboard stats
// ========================================================================

#[tokio::test]
async fn test_dashboard_stats() {
    let mut app = TestApp::new().await;
    let token = app.login().await;

    let (_, dish) = app
        .request(
            Method::POST,
            "/api/menu",
            Some(&token),
            Some(menu_item("Mushroom Risotto", "main", 18.99, false)),
        )
        .await;
    let dish_id = dish["id"].as_str().unwrap().to_string();

    let (_, _) = app
        .request(
            Method::POST,
            "/api/reservations/book",
            None,
            Some(booking("stats@example.com", future_date(2), "20:00")),
        )
        .await;

    let (_, order) = app
        .request(
            Method::POST,
            "/api/orders/place",
            None,
            Some(json!({
                "customer": {
                    "name": "Kiran Joshi",
                    "email": "kiran@example.com",
                    "phone": "+34611122233",
                },
                "items": [{"menu_item": dish_id, "quantity": 2}],
            })),
        )
        .await;
    let order_id = order["id"].as_str().unwrap().to_string();
    let (_, _) = app
        .request(
            Method::POST,
            "/api/orders/update-status",
            Some(&token),
            Some(json!({"order_id": order_id, "status": "completed"})),
        )
        .await;

    let (status, stats) = app
        .request(Method::GET, "/api/stats/dashboard", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK, "stats failed: {stats}");
    assert_eq!(stats["total_orders"], 1);
    assert_eq!(stats["pending_reservations"], 1);
    assert_eq!(stats["total_menu_items"], 1);
    assert!((stats["revenue"].as_f64().unwrap() - 37.98).abs() < 1e-6);
}

// ========================================================================
// Image upload
// ========================================================================

fn png_fixture() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 8, image::Rgb([200, 80, 40]));
    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .expect("encode png");
    png
}

fn multipart_body(boundary: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[tokio::test]
async fn test_image_upload_dedup_and_serve() {
    let work_dir = tempfile::tempdir().expect("tempdir");
    let mut app = TestApp::with_work_dir(work_dir.path().to_str().unwrap()).await;
    app.state
        .config
        .ensure_work_dir_structure()
        .expect("work dir structure");
    let token = app.login().await;

    let boundary = "saffron-test-boundary";
    let png = png_fixture();

    let upload_request = |token: &str| {
        Request::builder()
            .method(Method::POST)
            .uri("/api/image/upload")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(multipart_body(boundary, "dish.png", &png)))
            .unwrap()
    };

    let (status, bytes) = app.raw_request(upload_request(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    let filename = body["data"]["filename"].as_str().unwrap().to_string();
    assert!(filename.ends_with(".jpg"));

    // Same bytes again -> deduplicated to the same stored file
    let (status, bytes) = app.raw_request(upload_request(&token)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"]["filename"].as_str().unwrap(), filename);

    // Serve route is public and returns the JPEG bytes
    let serve = Request::builder()
        .method(Method::GET)
        .uri(format!("/api/image/{filename}"))
        .body(Body::empty())
        .unwrap();
    let (status, served) = app.raw_request(serve).await;
    assert_eq!(status, StatusCode::OK);
    // JPEG magic bytes
    assert_eq!(&served[..2], &[0xFF, 0xD8]);

    // Path traversal is rejected
    let sneaky = Request::builder()
        .method(Method::GET)
        .uri("/api/image/..%2Fsecrets.txt")
        .body(Body::empty())
        .unwrap();
    let (status, _) = app.raw_request(sneaky).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unauthenticated upload is rejected
    let anon = Request::builder()
        .method(Method::POST)
        .uri("/api/image/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(multipart_body(boundary, "dish.png", &png)))
        .unwrap();
    let (status, _) = app.raw_request(anon).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
