use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::transport_type::TransportType;
use crate::utils::errors::AppError;

pub struct TransportTypeRepository {
    pool: PgPool,
}

impl TransportTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<TransportType>, AppError> {
        let types = sqlx::query_as::<_, TransportType>(
            "SELECT id, name FROM transport_types ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing transport types: {}", e);
            AppError::Database(e)
        })?;

        Ok(types)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TransportType>, AppError> {
        let tt = sqlx::query_as::<_, TransportType>(
            "SELECT id, name FROM transport_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error finding transport type {}: {}", id, e);
            AppError::Database(e)
        })?;

        Ok(tt)
    }
}
