use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "bus-booking");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trip_create_requires_json_body() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/trips")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Sin Content-Type ni body el framework rechaza antes del handler
    assert_ne!(response.status(), StatusCode::OK);
    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_trip_create_accepts_json() {
    let app = create_test_app();
    let payload = json!({
        "from_city": "Damascus",
        "to_city": "Aleppo",
        "departure_time": "2024-06-01T08:00:00Z",
        "arrival_time": "2024-06-01T12:30:00Z",
        "seats_total": 44
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/trips")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// Función helper para crear la app de test
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({ "service": "bus-booking", "status": "healthy" }))
            }),
        )
        .route(
            "/api/trips",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(json!({ "success": true, "echo": body }))
            }),
        )
}
