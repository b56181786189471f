use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use desk_booker::adapters::mock::{BookingStore, DeskAvailability};
use desk_booker::api::handlers::AppState;
use desk_booker::api::router::create_router;
use desk_booker::api::types::*;
use desk_booker::application::booking::ServiceDependencies;
use desk_booker::domain::booking::Desk;
use desk_booker::domain::value_objects::DeskId;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// E2Eテスト用のアプリケーションセットアップ
///
/// モックアダプターと実際のAPIルーターを使用する。データベースは不要。
/// アダプターはテスト側から注入できるように、引数で受け取る。
fn setup_e2e_app(availability: Arc<DeskAvailability>, store: Arc<BookingStore>) -> axum::Router {
    let service_deps = ServiceDependencies {
        availability_source: availability,
        booking_store: store,
    };

    let app_state = Arc::new(AppState { service_deps });

    create_router(app_state)
}

fn booking_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()
}

fn booking_request_body() -> serde_json::Value {
    json!({
        "first_name": "Edward",
        "last_name": "Aleonope",
        "email": "eddytonia@cardiff.co.uk",
        "date": "2025-01-28",
    })
}

async fn post_booking(app: axum::Router, body: &serde_json::Value) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/bookings")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ============================================================================
// E2Eテスト: 予約エンドポイント
// ============================================================================

#[tokio::test]
async fn test_e2e_book_desk_success() {
    // Arrange: デスク7が空いている
    let availability = Arc::new(DeskAvailability::new());
    let store = Arc::new(BookingStore::new());
    availability.add_available_desk(
        booking_date(),
        Desk {
            id: DeskId::new(7),
        },
    );

    let app = setup_e2e_app(availability, store.clone());

    // Act: 予約作成（POST /bookings）
    let response = post_booking(app, &booking_request_body()).await;

    // Assert: 201 Created、ボディはリクエストの識別フィールド+成功コード
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let booking_response: BookDeskResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(booking_response.first_name, "Edward");
    assert_eq!(booking_response.last_name, "Aleonope");
    assert_eq!(booking_response.email, "eddytonia@cardiff.co.uk");
    assert_eq!(booking_response.date, booking_date());
    assert_eq!(booking_response.code, "success");

    // 予約がストアに保存されたことを確認
    let saved = store.saved_bookings();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].desk_id, DeskId::new(7));
    assert_eq!(saved[0].email, "eddytonia@cardiff.co.uk");
}

#[tokio::test]
async fn test_e2e_book_desk_no_desk_available() {
    // Arrange: 空きデスクなし
    let availability = Arc::new(DeskAvailability::new());
    let store = Arc::new(BookingStore::new());

    let app = setup_e2e_app(availability, store.clone());

    // Act
    let response = post_booking(app, &booking_request_body()).await;

    // Assert: 409 Conflict、ボディは業務結果コードを返す
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let booking_response: BookDeskResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(booking_response.first_name, "Edward");
    assert_eq!(booking_response.date, booking_date());
    assert_eq!(booking_response.code, "no_desk_available");

    // 保存は行われない
    assert_eq!(store.save_count(), 0);
}

#[tokio::test]
async fn test_e2e_book_desk_takes_first_desk_in_source_order() {
    // Arrange: 登録順（9, 4）のまま先頭が採用される
    let availability = Arc::new(DeskAvailability::new());
    let store = Arc::new(BookingStore::new());
    availability.add_available_desk(
        booking_date(),
        Desk {
            id: DeskId::new(9),
        },
    );
    availability.add_available_desk(
        booking_date(),
        Desk {
            id: DeskId::new(4),
        },
    );

    let app = setup_e2e_app(availability, store.clone());

    // Act
    let response = post_booking(app, &booking_request_body()).await;

    // Assert
    assert_eq!(response.status(), StatusCode::CREATED);

    let saved = store.saved_bookings();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].desk_id, DeskId::new(9));
}

// ============================================================================
// E2Eテスト: クエリエンドポイント
// ============================================================================

#[tokio::test]
async fn test_e2e_list_available_desks() {
    // Arrange: 指定日に2つのデスクが空いている
    let availability = Arc::new(DeskAvailability::new());
    let store = Arc::new(BookingStore::new());
    availability.add_available_desk(
        booking_date(),
        Desk {
            id: DeskId::new(9),
        },
    );
    availability.add_available_desk(
        booking_date(),
        Desk {
            id: DeskId::new(4),
        },
    );

    let app = setup_e2e_app(availability, store);

    // Act: 空きデスク一覧取得（GET /desks）
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/desks?date=2025-01-28")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert: ソースの順序のまま返される
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let desks: Vec<DeskResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(desks.len(), 2);
    assert_eq!(desks[0].desk_id, 9);
    assert_eq!(desks[1].desk_id, 4);
}

#[tokio::test]
async fn test_e2e_list_available_desks_empty() {
    // Arrange: 別の日付にのみデスクを登録
    let availability = Arc::new(DeskAvailability::new());
    let store = Arc::new(BookingStore::new());
    availability.add_available_desk(
        NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
        Desk {
            id: DeskId::new(7),
        },
    );

    let app = setup_e2e_app(availability, store);

    // Act
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/desks?date=2025-01-28")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert: 空の一覧
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let desks: Vec<DeskResponse> = serde_json::from_slice(&body).unwrap();
    assert!(desks.is_empty());
}

#[tokio::test]
async fn test_e2e_health_check() {
    let availability = Arc::new(DeskAvailability::new());
    let store = Arc::new(BookingStore::new());
    let app = setup_e2e_app(availability, store);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
