//! Controller de ciudades
//!
//! Datos de referencia de solo lectura con autocompletado alias-aware.

use sqlx::PgPool;

use crate::dto::city_dto::CityResponse;
use crate::repositories::city_repository::CityRepository;
use crate::services::city_alias;
use crate::utils::errors::AppError;

pub struct CityController {
    cities: CityRepository,
}

impl CityController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cities: CityRepository::new(pool),
        }
    }

    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<CityResponse>, AppError> {
        let cities = self.cities.list(limit).await?;
        Ok(cities.into_iter().map(CityResponse::from).collect())
    }

    /// Autocompletado por prefijo, con resolución de alias árabes
    pub async fn match_cities(&self, input: &str) -> Result<Vec<CityResponse>, AppError> {
        let cities = self.cities.list(None).await?;
        let matched = city_alias::match_cities(&cities, input);
        Ok(matched.into_iter().map(CityResponse::from).collect())
    }
}
