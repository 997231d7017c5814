use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::company_dto::ApiResponse;
use crate::dto::trip_dto::{
    FareResponse, FaresQuery, SaveTripRequest, TripDetailResponse, TripQuery, TripResponse,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_trips))
        .route("/export", get(export_trips))
        .route("/:id", get(get_trip));

    // Las operaciones que escriben exigen token válido y rol admin
    let admin = Router::new()
        .route("/", post(create_trip))
        .route("/:id", patch(update_trip).delete(delete_trip))
        .route("/:id/deactivate", patch(deactivate_trip))
        .layer(axum::middleware::from_fn(admin_only_middleware))
        .layer(axum::middleware::from_fn_with_state(state, auth_middleware));

    public.merge(admin)
}

pub fn create_fare_router() -> Router<AppState> {
    Router::new().route("/", get(list_fares))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<SaveTripRequest>,
) -> Result<Json<ApiResponse<TripDetailResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SaveTripRequest>,
) -> Result<Json<ApiResponse<TripDetailResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripDetailResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(&query).await?;
    Ok(Json(response))
}

async fn export_trips(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<impl IntoResponse, AppError> {
    let controller = TripController::new(state.pool.clone());
    let csv_body = controller.export_csv(&query).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"trips.csv\"",
            ),
        ],
        csv_body,
    ))
}

async fn deactivate_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.deactivate(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Viaje desactivado exitosamente"
    })))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_fares(
    State(state): State<AppState>,
    Query(query): Query<FaresQuery>,
) -> Result<Json<Vec<FareResponse>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list_fares(query.trip_id).await?;
    Ok(Json(response))
}
