use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::city::City;
use crate::utils::errors::AppError;

pub struct CityRepository {
    pool: PgPool,
}

impl CityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<City>, AppError> {
        let cities = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, country_code, latitude, longitude
            FROM cities
            ORDER BY name
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing cities: {}", e);
            AppError::Database(e)
        })?;

        Ok(cities)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<City>, AppError> {
        let city = sqlx::query_as::<_, City>(
            "SELECT id, name, country_code, latitude, longitude FROM cities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error finding city {}: {}", id, e);
            AppError::Database(e)
        })?;

        Ok(city)
    }

    /// Búsqueda por nombre exacto (case-insensitive, sin wildcards)
    pub async fn find_by_name(&self, name: &str) -> Result<Option<City>, AppError> {
        let city = sqlx::query_as::<_, City>(
            r#"
            SELECT id, name, country_code, latitude, longitude
            FROM cities
            WHERE LOWER(name) = LOWER($1)
            "#,
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error finding city '{}': {}", name, e);
            AppError::Database(e)
        })?;

        Ok(city)
    }
}
