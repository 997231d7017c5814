//! Controller de rutas
//!
//! Resolución find-or-create del par ordenado de ciudades. La operación
//! es idempotente: repetirla con el mismo par devuelve siempre la misma
//! ruta, nunca crea duplicados.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::route_dto::{ResolveRouteRequest, RouteResponse};
use crate::repositories::city_repository::CityRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct RouteController {
    routes: RouteRepository,
    cities: CityRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            routes: RouteRepository::new(pool.clone()),
            cities: CityRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<RouteResponse>, AppError> {
        let routes = self.routes.list().await?;
        Ok(routes.into_iter().map(RouteResponse::from).collect())
    }

    pub async fn resolve_or_create(
        &self,
        request: ResolveRouteRequest,
    ) -> Result<RouteResponse, AppError> {
        // Validar antes de tocar la base: mismo par de ciudades
        if request.from_city_id == request.to_city_id {
            return Err(AppError::Validation(
                "La ciudad de origen y la de destino deben ser diferentes".to_string(),
            ));
        }

        self.ensure_city_exists(request.from_city_id).await?;
        self.ensure_city_exists(request.to_city_id).await?;

        let route = self
            .routes
            .resolve_or_create(request.from_city_id, request.to_city_id)
            .await?;

        Ok(RouteResponse::from(route))
    }

    async fn ensure_city_exists(&self, id: Uuid) -> Result<(), AppError> {
        self.cities
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| not_found_error("City", &id.to_string()))
    }
}
