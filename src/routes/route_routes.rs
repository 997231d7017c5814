use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{ResolveRouteRequest, RouteResponse};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router(state: AppState) -> Router<AppState> {
    let public = Router::new().route("/", get(list_routes));

    let admin = Router::new()
        .route("/", axum::routing::post(resolve_route))
        .layer(axum::middleware::from_fn(admin_only_middleware))
        .layer(axum::middleware::from_fn_with_state(state, auth_middleware));

    public.merge(admin)
}

async fn list_routes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn resolve_route(
    State(state): State<AppState>,
    Json(request): Json<ResolveRouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let controller = RouteController::new(state.pool.clone());
    let response = controller.resolve_or_create(request).await?;
    Ok(Json(response))
}
