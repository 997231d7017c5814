use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::station::Station;
use crate::utils::errors::AppError;

pub struct StationRepository {
    pool: PgPool,
}

impl StationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, city_id: Option<Uuid>) -> Result<Vec<Station>, AppError> {
        let stations = sqlx::query_as::<_, Station>(
            r#"
            SELECT id, city_id, name
            FROM stations
            WHERE ($1::uuid IS NULL OR city_id = $1)
            ORDER BY name
            "#,
        )
        .bind(city_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing stations: {}", e);
            AppError::Database(e)
        })?;

        Ok(stations)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>, AppError> {
        let station =
            sqlx::query_as::<_, Station>("SELECT id, city_id, name FROM stations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!("Error finding station {}: {}", id, e);
                    AppError::Database(e)
                })?;

        Ok(station)
    }
}
