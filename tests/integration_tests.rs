use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use tower::ServiceExt;

use frontdesk::config::AppConfig;
use frontdesk::handlers;
use frontdesk::models::{
    BookedService, Booking, BookingStatus, Branch, OpeningHoursEntry, Service, Staff,
    WorkingHoursEntry,
};
use frontdesk::services::platform::{NewBooking, PlatformApi};
use frontdesk::services::roster::ScheduleCache;
use frontdesk::state::AppState;

// ── Mock platform ──

struct MockPlatform {
    branch: Branch,
    staff: Vec<Staff>,
    services: Vec<Service>,
    bookings: HashMap<NaiveDate, Vec<Booking>>,
    failing_dates: Vec<NaiveDate>,
    created: Arc<Mutex<Vec<NewBooking>>>,
}

#[async_trait]
impl PlatformApi for MockPlatform {
    async fn fetch_branch(&self, _branch_id: &str) -> anyhow::Result<Branch> {
        Ok(self.branch.clone())
    }

    async fn fetch_staff(&self, _branch_id: &str) -> anyhow::Result<Vec<Staff>> {
        Ok(self.staff.clone())
    }

    async fn fetch_services(&self, _branch_id: &str) -> anyhow::Result<Vec<Service>> {
        Ok(self.services.clone())
    }

    async fn fetch_bookings(&self, _branch_id: &str, date: NaiveDate) -> anyhow::Result<Vec<Booking>> {
        if self.failing_dates.contains(&date) {
            anyhow::bail!("platform API error (503): day unavailable");
        }
        Ok(self.bookings.get(&date).cloned().unwrap_or_default())
    }

    async fn create_booking(&self, booking: &NewBooking) -> anyhow::Result<()> {
        self.created.lock().unwrap().push(booking.clone());
        Ok(())
    }
}

// ── Helpers ──

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn opening(day: &str, from: &str, to: &str) -> OpeningHoursEntry {
    OpeningHoursEntry {
        day: day.to_string(),
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn working(day: u8) -> WorkingHoursEntry {
    WorkingHoursEntry {
        day,
        start_time: "09:00".to_string(),
        end_time: "17:00".to_string(),
        is_working: true,
    }
}

fn booking(id: &str, staff_id: &str, scheduled_on: &str, duration: u32) -> Booking {
    Booking {
        id: id.to_string(),
        customer_id: Some("cust-1".to_string()),
        customer_name: Some("Alice".to_string()),
        staff_id: Some(staff_id.to_string()),
        scheduled_on: dt(scheduled_on),
        duration_minutes: duration,
        services: vec![],
        status: BookingStatus::Confirmed,
    }
}

fn mock_platform() -> MockPlatform {
    MockPlatform {
        branch: Branch {
            id: "branch-1".to_string(),
            name: "Main Street Salon".to_string(),
            opening_hours: vec![
                opening("Monday - Friday", "9:00 am", "5:00 pm"),
                opening("Saturday", "10:00 am", "2:00 pm"),
            ],
        },
        staff: vec![
            Staff {
                id: "staff-1".to_string(),
                name: "Dana".to_string(),
                // Sunday = 0 wire format: Monday through Friday.
                working_hours: (1..=5).map(working).collect(),
            },
            Staff {
                id: "staff-2".to_string(),
                name: "Lee".to_string(),
                working_hours: vec![],
            },
        ],
        services: vec![
            Service {
                id: "cut".to_string(),
                name: "Haircut".to_string(),
                duration_minutes: 45,
                price: 3500,
                staff_ids: vec!["staff-1".to_string()],
            },
            Service {
                id: "color".to_string(),
                name: "Color".to_string(),
                duration_minutes: 90,
                price: 12000,
                staff_ids: vec![],
            },
        ],
        bookings: HashMap::new(),
        failing_dates: vec![],
        created: Arc::new(Mutex::new(vec![])),
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        platform_api_url: "http://localhost:9".to_string(),
        platform_api_token: "".to_string(),
    }
}

fn test_state(platform: MockPlatform) -> Arc<AppState> {
    Arc::new(AppState {
        config: test_config(),
        platform: Box::new(platform),
        schedule: ScheduleCache::new(),
    })
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/calendar/day", get(handlers::calendar::day_view))
        .route("/api/calendar/grid", get(handlers::calendar::grid_view))
        .route("/api/services", get(handlers::catalog::list_services))
        .route("/api/bookings/preview", post(handlers::bookings::preview_booking))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/cache/refresh", post(handlers::cache::refresh_cache))
        .with_state(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let res = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = res.status();
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// ── Day view ──

#[tokio::test]
async fn test_health() {
    let app = test_app(test_state(mock_platform()));
    let (status, json) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_day_view_closed_sunday() {
    let app = test_app(test_state(mock_platform()));
    // 2025-06-15 is a Sunday; no opening-hours entry covers it.
    let (status, json) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&date=2025-06-15",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["closed"], true);
    assert_eq!(json["slots"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_day_view_slot_grid() {
    let app = test_app(test_state(mock_platform()));
    let (status, json) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&staff_id=staff-1&date=2025-06-16",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["closed"], false);
    assert_eq!(json["opens"], "9:00 am");
    assert_eq!(json["closes"], "5:00 pm");
    assert_eq!(json["staff_working"], true);

    let slots = json["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 32); // 9am-5pm at 15-minute steps
    assert_eq!(slots[0]["start_minutes"], 540);
    assert_eq!(slots[0]["time"], "9:00 am");
    assert_eq!(slots[31]["start_minutes"], 17 * 60 - 15);
    for pair in slots.windows(2) {
        let a = pair[0]["start_minutes"].as_u64().unwrap();
        let b = pair[1]["start_minutes"].as_u64().unwrap();
        assert_eq!(b - a, 15);
    }
}

#[tokio::test]
async fn test_day_view_hides_occupied_slots() {
    let mut platform = mock_platform();
    platform.bookings.insert(
        date("2025-06-16"),
        vec![booking("bk-1", "staff-1", "2025-06-16 10:00", 30)],
    );
    let app = test_app(test_state(platform));

    let (_, json) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&staff_id=staff-1&date=2025-06-16",
    )
    .await;

    let available: HashMap<u64, bool> = json["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["start_minutes"].as_u64().unwrap(), s["available"].as_bool().unwrap()))
        .collect();

    assert_eq!(available[&585], true); // 9:45
    assert_eq!(available[&600], false); // 10:00 taken
    assert_eq!(available[&615], false); // 10:15 taken
    assert_eq!(available[&630], true); // 10:30 free again (half-open)
}

#[tokio::test]
async fn test_day_view_other_staff_unaffected() {
    let mut platform = mock_platform();
    platform.bookings.insert(
        date("2025-06-16"),
        vec![booking("bk-1", "staff-1", "2025-06-16 10:00", 30)],
    );
    let app = test_app(test_state(platform));

    let (_, json) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&staff_id=staff-2&date=2025-06-16",
    )
    .await;

    let ten_am = json["slots"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["start_minutes"] == 600)
        .unwrap();
    assert_eq!(ten_am["available"], true);
}

#[tokio::test]
async fn test_day_view_staff_off_day() {
    let app = test_app(test_state(mock_platform()));
    // Saturday: branch open, but Dana only works Monday-Friday.
    let (status, json) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&staff_id=staff-1&date=2025-06-21",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["closed"], false);
    assert_eq!(json["staff_working"], false);
    assert!(json["slots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_day_view_unconfigured_staff_always_available() {
    let app = test_app(test_state(mock_platform()));
    let (_, json) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&staff_id=staff-2&date=2025-06-21",
    )
    .await;

    assert_eq!(json["staff_working"], true);
    // Saturday hours 10am-2pm: 16 slots.
    assert_eq!(json["slots"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn test_day_view_unknown_staff() {
    let app = test_app(test_state(mock_platform()));
    let (status, _) = get_json(
        app,
        "/api/calendar/day?branch_id=branch-1&staff_id=nobody&date=2025-06-16",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_day_view_rejects_bad_date() {
    let app = test_app(test_state(mock_platform()));
    let (status, _) = get_json(app, "/api/calendar/day?branch_id=branch-1&date=tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Grid view ──

#[tokio::test]
async fn test_grid_cross_boundary_card_geometry() {
    let mut platform = mock_platform();
    platform.bookings.insert(
        date("2025-06-16"),
        vec![booking("bk-1", "staff-1", "2025-06-16 09:50", 30)],
    );
    let app = test_app(test_state(platform));

    let (status, json) = get_json(
        app,
        "/api/calendar/grid?branch_id=branch-1&staff_id=staff-1&from=2025-06-16&to=2025-06-16",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let hours = json["days"][0]["hours"].as_array().unwrap();
    assert_eq!(hours.len(), 12); // 08:00 through 19:00
    assert_eq!(hours[0]["start_minutes"], 480);

    // 9:50-10:20 belongs to the 9:00 row only.
    let nine = &hours[1];
    assert_eq!(nine["label"], "9:00 am");
    let cards = nine["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    let top = cards[0]["top_percent"].as_f64().unwrap();
    assert!((top - 83.3).abs() < 0.05, "top was {top}");
    assert_eq!(cards[0]["height_percent"].as_f64().unwrap(), 50.0);
    assert_eq!(cards[0]["starts_at"], "9:50 am");

    let ten = &hours[2];
    assert!(ten["cards"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_grid_expands_multi_service_bookings() {
    let mut platform = mock_platform();
    let mut multi = booking("bk-1", "staff-1", "2025-06-16 10:00", 75);
    multi.services = vec![
        BookedService {
            service_id: "cut".to_string(),
            staff_id: None,
            duration_minutes: 30,
        },
        BookedService {
            service_id: "color".to_string(),
            staff_id: None,
            duration_minutes: 45,
        },
    ];
    platform.bookings.insert(date("2025-06-16"), vec![multi]);
    let app = test_app(test_state(platform));

    let (_, json) = get_json(
        app,
        "/api/calendar/grid?branch_id=branch-1&staff_id=staff-1&from=2025-06-16&to=2025-06-16",
    )
    .await;

    // Both sub-appointments start inside the 10:00 row.
    let ten = &json["days"][0]["hours"].as_array().unwrap()[2];
    let cards = ten["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["service_id"], "cut");
    assert_eq!(cards[0]["starts_at"], "10:00 am");
    assert_eq!(cards[0]["z_index"], 0);
    assert_eq!(cards[1]["service_id"], "color");
    assert_eq!(cards[1]["starts_at"], "10:30 am");
    assert_eq!(cards[1]["z_index"], 1);
    // Both cards carry the parent booking id.
    assert_eq!(cards[0]["booking_id"], "bk-1");
    assert_eq!(cards[1]["booking_id"], "bk-1");

    // The second sub runs to 11:15 but starts at 10:30, so the 11:00 row
    // stays empty.
    let eleven = &json["days"][0]["hours"].as_array().unwrap()[3];
    assert!(eleven["cards"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_grid_failed_day_degrades_to_empty() {
    let mut platform = mock_platform();
    platform.bookings.insert(
        date("2025-06-16"),
        vec![booking("bk-1", "staff-1", "2025-06-16 09:00", 30)],
    );
    platform.failing_dates.push(date("2025-06-17"));
    let app = test_app(test_state(platform));

    let (status, json) = get_json(
        app,
        "/api/calendar/grid?branch_id=branch-1&from=2025-06-16&to=2025-06-17",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);

    let monday_cards: usize = days[0]["hours"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["cards"].as_array().unwrap().len())
        .sum();
    assert_eq!(monday_cards, 1);

    // Tuesday's fetch failed: open day, no cards, no error.
    assert_eq!(days[1]["closed"], false);
    let tuesday_cards: usize = days[1]["hours"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["cards"].as_array().unwrap().len())
        .sum();
    assert_eq!(tuesday_cards, 0);
}

#[tokio::test]
async fn test_grid_closed_day_has_no_hour_rows() {
    let app = test_app(test_state(mock_platform()));
    let (_, json) = get_json(
        app,
        "/api/calendar/grid?branch_id=branch-1&from=2025-06-15&to=2025-06-15",
    )
    .await;

    assert_eq!(json["days"][0]["closed"], true);
    assert!(json["days"][0]["hours"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_grid_rejects_reversed_range() {
    let app = test_app(test_state(mock_platform()));
    let (status, _) = get_json(
        app,
        "/api/calendar/grid?branch_id=branch-1&from=2025-06-17&to=2025-06-16",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Booking preview & create ──

#[tokio::test]
async fn test_preview_chains_services() {
    let app = test_app(test_state(mock_platform()));
    let (status, json) = post_json(
        app,
        "/api/bookings/preview",
        serde_json::json!({
            "start_time": "10:00 am",
            "services": [
                {"service_id": "cut", "duration_minutes": 30, "price": 3500},
                {"service_id": "color", "duration_minutes": 45, "price": 12000},
                {"service_id": "dry", "duration_minutes": 20, "price": 1500}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let subs = json["sub_appointments"].as_array().unwrap();
    assert_eq!(subs[0]["starts_at"], "10:00 am");
    assert_eq!(subs[1]["starts_at"], "10:30 am");
    assert_eq!(subs[2]["starts_at"], "11:15 am");
    assert_eq!(json["ends_at"], "11:35 am");
    assert_eq!(json["total_duration_minutes"], 95);
    assert_eq!(json["total_price"], 17000);
}

#[tokio::test]
async fn test_preview_single_service() {
    let app = test_app(test_state(mock_platform()));
    let (_, json) = post_json(
        app,
        "/api/bookings/preview",
        serde_json::json!({
            "start_time": "2:00 pm",
            "services": [{"service_id": "cut", "duration_minutes": 45, "price": 3500}]
        }),
    )
    .await;

    let subs = json["sub_appointments"].as_array().unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0]["starts_at"], "2:00 pm");
    assert_eq!(subs[0]["ends_at"], "2:45 pm");
}

#[tokio::test]
async fn test_preview_rejects_empty_selection() {
    let app = test_app(test_state(mock_platform()));
    let (status, _) = post_json(
        app,
        "/api/bookings/preview",
        serde_json::json!({"start_time": "10:00 am", "services": []}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking_forwards_to_platform() {
    let platform = mock_platform();
    let created = Arc::clone(&platform.created);
    let app = test_app(test_state(platform));

    let (status, json) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "staff_id": "staff-1",
            "customer_id": "cust-1",
            "date": "2025-06-16",
            "start_time": "2:00 pm",
            "services": [{"service_id": "cut", "duration_minutes": 45, "price": 3500}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!json["booking_id"].as_str().unwrap().is_empty());
    assert_eq!(json["sub_appointments"][0]["starts_at"], "2:00 pm");
    assert_eq!(json["sub_appointments"][0]["ends_at"], "2:45 pm");

    let sent = created.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].scheduled_on, "2025-06-16 14:00:00");
    assert_eq!(sent[0].duration_minutes, 45);
    assert_eq!(sent[0].staff_id.as_deref(), Some("staff-1"));
}

#[tokio::test]
async fn test_create_booking_conflict() {
    let mut platform = mock_platform();
    platform.bookings.insert(
        date("2025-06-16"),
        vec![booking("bk-1", "staff-1", "2025-06-16 14:00", 60)],
    );
    let created = Arc::clone(&platform.created);
    let app = test_app(test_state(platform));

    let (status, json) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "staff_id": "staff-1",
            "date": "2025-06-16",
            "start_time": "2:30 pm",
            "services": [{"service_id": "cut", "duration_minutes": 45}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("already booked"));
    assert!(created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_booking_back_to_back_is_allowed() {
    let mut platform = mock_platform();
    platform.bookings.insert(
        date("2025-06-16"),
        vec![booking("bk-1", "staff-1", "2025-06-16 14:00", 60)],
    );
    let app = test_app(test_state(platform));

    let (status, _) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "staff_id": "staff-1",
            "date": "2025-06-16",
            "start_time": "3:00 pm",
            "services": [{"service_id": "cut", "duration_minutes": 45}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_booking_ignores_cancelled_conflict() {
    let mut platform = mock_platform();
    let mut cancelled = booking("bk-1", "staff-1", "2025-06-16 14:00", 60);
    cancelled.status = BookingStatus::Cancelled;
    platform.bookings.insert(date("2025-06-16"), vec![cancelled]);
    let app = test_app(test_state(platform));

    let (status, _) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "staff_id": "staff-1",
            "date": "2025-06-16",
            "start_time": "2:00 pm",
            "services": [{"service_id": "cut", "duration_minutes": 45}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_booking_on_closed_day() {
    let app = test_app(test_state(mock_platform()));
    let (status, json) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "date": "2025-06-15",
            "start_time": "10:00 am",
            "services": [{"service_id": "cut", "duration_minutes": 45}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("closed"));
}

#[tokio::test]
async fn test_create_booking_outside_opening_hours() {
    let app = test_app(test_state(mock_platform()));
    // 4:30 pm + 45 minutes runs past 5:00 pm close.
    let (status, _) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "date": "2025-06-16",
            "start_time": "4:30 pm",
            "services": [{"service_id": "cut", "duration_minutes": 45}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_booking_staff_off_day() {
    let app = test_app(test_state(mock_platform()));
    let (status, _) = post_json(
        app,
        "/api/bookings",
        serde_json::json!({
            "branch_id": "branch-1",
            "staff_id": "staff-1",
            "date": "2025-06-21",
            "start_time": "11:00 am",
            "services": [{"service_id": "cut", "duration_minutes": 45}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

// ── Catalog & cache ──

#[tokio::test]
async fn test_services_filtered_by_staff_eligibility() {
    let state = test_state(mock_platform());

    let (_, all) = get_json(test_app(state.clone()), "/api/services?branch_id=branch-1").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    // "cut" is restricted to staff-1; Lee only sees "color".
    let (_, lee) = get_json(
        test_app(state),
        "/api/services?branch_id=branch-1&staff_id=staff-2",
    )
    .await;
    let names: Vec<&str> = lee
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["color"]);
}

#[tokio::test]
async fn test_cache_refresh() {
    let state = test_state(mock_platform());

    // Warm the cache, then refresh it.
    let (_, _) = get_json(
        test_app(state.clone()),
        "/api/calendar/day?branch_id=branch-1&date=2025-06-16",
    )
    .await;

    let res = test_app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/cache/refresh?branch_id=branch-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // The next day view refetches and still works.
    let (status, json) = get_json(
        test_app(state),
        "/api/calendar/day?branch_id=branch-1&date=2025-06-16",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["closed"], false);
}
