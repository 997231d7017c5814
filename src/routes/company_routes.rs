use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::{
    ApiResponse, CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct CompaniesQuery {
    show_all: Option<bool>,
}

pub fn create_company_router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_companies))
        .route("/:id", get(get_company));

    let admin = Router::new()
        .route("/", post(create_company))
        .route("/:id", put(update_company))
        .route("/:id", delete(delete_company))
        .layer(axum::middleware::from_fn(admin_only_middleware))
        .layer(axum::middleware::from_fn_with_state(state, auth_middleware));

    public.merge(admin)
}

async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompaniesQuery>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.list(query.show_all.unwrap_or(false)).await?;
    Ok(Json(response))
}

async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<ApiResponse<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    controller.soft_delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Empresa desactivada exitosamente"
    })))
}
