use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::city_controller::CityController;
use crate::dto::city_dto::{CitiesQuery, CityResponse, MatchCitiesQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_city_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cities))
        .route("/match", get(match_cities))
}

async fn list_cities(
    State(state): State<AppState>,
    Query(query): Query<CitiesQuery>,
) -> Result<Json<Vec<CityResponse>>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.list(query.limit).await?;
    Ok(Json(response))
}

async fn match_cities(
    State(state): State<AppState>,
    Query(query): Query<MatchCitiesQuery>,
) -> Result<Json<Vec<CityResponse>>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.match_cities(&query.q).await?;
    Ok(Json(response))
}
