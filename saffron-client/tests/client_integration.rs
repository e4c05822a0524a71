//! Client ↔ server integration over the in-process oneshot transport.
//!
//! Runs with `cargo test --features in-process`. The server router is driven
//! directly through tower, no sockets involved.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use saffron_client::services::{
    AuthService, BannerService, FeedbackService, MenuService, OrderService, ReservationService,
    SubscribeService,
};
use saffron_client::{ClientError, OneshotHttpClient};

use shared::models::{
    BannerCreate, FeedbackCreate, MenuItemCreate, MenuItemUpdate, OrderCustomer, OrderItemInput,
    OrderStatus, PlaceOrderRequest, ReservationCreate, ReservationStatus,
};

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

use saffron_server::auth::jwt::JwtConfig;
use saffron_server::build_app;
use saffron_server::core::{Config, ServerState};
use saffron_server::db::DbService;

const ADMIN_EMAIL: &str = "admin@saffron.local";
const ADMIN_PASSWORD: &str = "saffron-dev-password";

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

async fn in_process_client() -> OneshotHttpClient {
    let db = Surreal::new::<Mem>(()).await.expect("open mem db");
    let db = DbService::from_connection(db).await.expect("select ns").db;

    let mut config = Config::with_overrides("/tmp/saffron-client-test", 0);
    config.admin_email = ADMIN_EMAIL.to_string();
    config.admin_password = ADMIN_PASSWORD.to_string();
    config.jwt = JwtConfig {
        secret: "client-integration-secret-client-integr".to_string(),
        expiration_minutes: 60,
        issuer: "saffron-server".to_string(),
        audience: "saffron-site".to_string(),
    };

    let state = ServerState::with_db(config, db);
    state.bootstrap_admin().await.expect("bootstrap admin");

    let router = build_app(&state).with_state(state);
    OneshotHttpClient::new(router)
}

fn sample_item(name: &str, price: &str, featured: bool) -> MenuItemCreate {
    MenuItemCreate {
        name: name.to_string(),
        description: format!("{name} fresh from the kitchen"),
        price: dec(price),
        category: "main".to_string(),
        image: "https://images.example.com/dish.jpg".to_string(),
        featured,
        dietary: vec!["vegetarian".to_string()],
        sort_order: None,
    }
}

#[tokio::test]
async fn test_admin_session_and_menu_management() {
    let client = in_process_client().await;
    let auth = AuthService::new(&client);
    let menu = MenuService::new(&client);

    // Admin routes are closed before login
    let err = menu.create(&sample_item("Signature Pasta", "13.20", true)).await;
    assert!(matches!(err, Err(ClientError::Unauthorized)));

    // Login installs the token on the transport
    let session = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("login");
    assert_eq!(session.user.role, "admin");

    let me = auth.me().await.expect("me");
    assert_eq!(me.email, ADMIN_EMAIL);

    // Create and browse
    let created = menu
        .create(&sample_item("Signature Pasta", "13.20", true))
        .await
        .expect("create item");
    let id = created.id.clone().expect("item id");

    let listing = menu.list(None).await.expect("public list");
    assert_eq!(listing.len(), 1);
    let featured = menu.featured().await.expect("featured");
    assert_eq!(featured.len(), 1);

    // Client-side schema validation rejects before any request is made
    let err = menu.create(&sample_item("", "1.00", false)).await;
    assert!(matches!(err, Err(ClientError::Validation(_))));

    // Duplicate surfaces the server conflict
    let err = menu.create(&sample_item("Signature Pasta", "13.20", false)).await;
    assert!(matches!(err, Err(ClientError::Conflict(_))));

    // Update, then hide from the public menu
    let updated = menu
        .update(
            &id,
            &MenuItemUpdate {
                price: Some(dec("14.50")),
                is_available: Some(false),
                ..Default::default()
            },
        )
        .await
        .expect("update item");
    assert_eq!(updated.price, dec("14.50"));

    assert!(menu.list(None).await.expect("list").is_empty());
    assert_eq!(menu.list_all().await.expect("list_all").len(), 1);

    assert!(menu.delete(&id).await.expect("delete"));

    // Logout drops the token; admin calls are closed again
    auth.logout().await.expect("logout");
    let err = menu.list_all().await;
    assert!(matches!(err, Err(ClientError::Unauthorized)));
}

#[tokio::test]
async fn test_banner_carousel_flow() {
    let client = in_process_client().await;
    let auth = AuthService::new(&client);
    let banners = BannerService::new(&client);

    auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("login");

    let banner = banners
        .create(&BannerCreate {
            image: "https://images.example.com/hero.jpg".to_string(),
            title: "Welcome to Our Restaurant".to_string(),
            description: "Experience the finest dining in town".to_string(),
            active: None,
            sort_order: Some(1),
        })
        .await
        .expect("create banner");
    let id = banner.id.clone().expect("banner id");
    assert!(banner.active);

    assert_eq!(banners.carousel().await.expect("carousel").len(), 1);

    let toggled = banners.toggle(&id).await.expect("toggle");
    assert!(!toggled.active);
    assert!(banners.carousel().await.expect("carousel").is_empty());
    assert_eq!(banners.list().await.expect("list").len(), 1);

    assert!(banners.delete(&id).await.expect("delete"));
}

fn sample_booking(email: &str, time: &str) -> ReservationCreate {
    ReservationCreate {
        name: "Amit Kumar".to_string(),
        email: email.to_string(),
        phone: "+49 30 1234567".to_string(),
        date: Utc::now().date_naive() + Duration::days(3),
        time: time.to_string(),
        guests: 4,
        occasion: Some("Birthday".to_string()),
        special_requests: None,
    }
}

#[tokio::test]
async fn test_reservation_lifecycle() {
    let client = in_process_client().await;
    let auth = AuthService::new(&client);
    let reservations = ReservationService::new(&client);

    // Booking is public
    let booked = reservations
        .book(&sample_booking("amit@example.com", "19:00"))
        .await
        .expect("book");
    assert_eq!(booked.status, ReservationStatus::Pending);
    let id = booked.id.clone().expect("reservation id");

    // Client rejects off-slot times locally
    let err = reservations
        .book(&sample_booking("mira@example.com", "15:00"))
        .await;
    assert!(matches!(err, Err(ClientError::Validation(_))));

    // Duplicate slot surfaces the server conflict
    let err = reservations
        .book(&sample_booking("amit@example.com", "19:00"))
        .await;
    assert!(matches!(err, Err(ClientError::Conflict(_))));

    // Admin management
    auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("login");

    let pending = reservations
        .list(Some(24), Some(ReservationStatus::Pending))
        .await
        .expect("list pending");
    assert_eq!(pending.len(), 1);

    let confirmed = reservations
        .update_status(&id, ReservationStatus::Confirmed)
        .await
        .expect("confirm");
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    // Illegal transition is rejected with the business-rule error
    let err = reservations
        .update_status(&id, ReservationStatus::Pending)
        .await;
    assert!(matches!(err, Err(ClientError::Rejected(_))));

    reservations
        .update_status(&id, ReservationStatus::Completed)
        .await
        .expect("complete");

    // Retention purge
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let outcome = reservations.purge(0).await.expect("purge");
    assert_eq!(outcome.deleted, 1);
    assert!(reservations.list(None, None).await.expect("list").is_empty());
}

#[tokio::test]
async fn test_order_flow_with_server_side_totals() {
    let client = in_process_client().await;
    let auth = AuthService::new(&client);
    let menu = MenuService::new(&client);
    let orders = OrderService::new(&client);

    auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("login");
    let pasta = menu
        .create(&sample_item("Signature Pasta", "13.20", false))
        .await
        .expect("create item");
    let pasta_id = pasta.id.clone().expect("item id");
    auth.logout().await.expect("logout");

    // Guests order without a session
    let placed = orders
        .place(&PlaceOrderRequest {
            customer: OrderCustomer {
                name: "Vikram Malhotra".to_string(),
                email: "vikram@example.com".to_string(),
                phone: "+34612345678".to_string(),
            },
            items: vec![OrderItemInput {
                menu_item: pasta_id.clone(),
                quantity: 3,
            }],
            note: None,
        })
        .await
        .expect("place order");

    assert_eq!(placed.status, OrderStatus::Processing);
    assert_eq!(placed.total, dec("39.60"));
    assert_eq!(placed.items[0].unit_price, dec("13.20"));
    // Whole-euro display formatting, as the order summary renders it
    assert_eq!(shared::money::format_euro(placed.total), "40 €");
    let order_id = placed.id.clone().expect("order id");

    // Public tracking
    let tracked = orders.get(&order_id).await.expect("track order");
    assert_eq!(tracked.items.len(), 1);

    // Admin completes it
    auth.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.expect("login");
    assert_eq!(orders.list().await.expect("list").len(), 1);

    let completed = orders
        .update_status(&order_id, OrderStatus::Completed)
        .await
        .expect("complete");
    assert_eq!(completed.status, OrderStatus::Completed);

    let err = orders
        .update_status(&order_id, OrderStatus::Cancelled)
        .await;
    assert!(matches!(err, Err(ClientError::Rejected(_))));
}

#[tokio::test]
async fn test_feedback_and_subscribe() {
    let client = in_process_client().await;
    let feedback = FeedbackService::new(&client);
    let subscribe = SubscribeService::new(&client);

    let review = feedback
        .submit(&FeedbackCreate {
            name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            rating: 4,
            comment: "Lovely evening, the risotto was superb.".to_string(),
        })
        .await
        .expect("submit review");
    assert_eq!(review.rating, 4);

    // Local schema validation catches an out-of-range rating
    let err = feedback
        .submit(&FeedbackCreate {
            name: "Priya Patel".to_string(),
            email: "priya@example.com".to_string(),
            rating: 6,
            comment: "Too good".to_string(),
        })
        .await;
    assert!(matches!(err, Err(ClientError::Validation(_))));

    let reviews = feedback.list().await.expect("list reviews");
    assert_eq!(reviews.len(), 1);
    assert_eq!(
        FeedbackService::<OneshotHttpClient>::average_rating(&reviews),
        Some(4.0)
    );

    subscribe
        .subscribe("friend@example.com")
        .await
        .expect("subscribe");
    let err = subscribe.subscribe("friend@example.com").await;
    assert!(matches!(err, Err(ClientError::Conflict(_))));
}
