use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::reference_dto::{StationResponse, StationsQuery, TransportTypeResponse};
use crate::repositories::station_repository::StationRepository;
use crate::repositories::transport_type_repository::TransportTypeRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_station_router() -> Router<AppState> {
    Router::new().route("/", get(list_stations))
}

pub fn create_transport_type_router() -> Router<AppState> {
    Router::new().route("/", get(list_transport_types))
}

async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let stations = StationRepository::new(state.pool.clone())
        .list(query.city_id)
        .await?;
    Ok(Json(stations.into_iter().map(StationResponse::from).collect()))
}

async fn list_transport_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransportTypeResponse>>, AppError> {
    let types = TransportTypeRepository::new(state.pool.clone())
        .list()
        .await?;
    Ok(Json(types.into_iter().map(TransportTypeResponse::from).collect()))
}
