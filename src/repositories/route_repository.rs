use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT id, from_city_id, to_city_id, created_at FROM routes ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing routes: {}", e);
            AppError::Database(e)
        })?;

        Ok(routes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>(
            "SELECT id, from_city_id, to_city_id, created_at FROM routes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error finding route {}: {}", id, e);
            AppError::Database(e)
        })?;

        Ok(route)
    }

    /// Resolver la ruta de un par ordenado de ciudades, creándola si no
    /// existe. Es un único statement atómico: el índice único sobre
    /// (from_city_id, to_city_id) garantiza que N llamadas concurrentes
    /// devuelven siempre la misma fila. El DO UPDATE no-op hace que el
    /// RETURNING devuelva también la fila ya existente.
    pub async fn resolve_or_create(
        &self,
        from_city_id: Uuid,
        to_city_id: Uuid,
    ) -> Result<Route, AppError> {
        Self::resolve_or_create_on(&self.pool, from_city_id, to_city_id).await
    }

    /// Variante sobre un executor arbitrario (pool o transacción)
    pub async fn resolve_or_create_on<'e, E>(
        executor: E,
        from_city_id: Uuid,
        to_city_id: Uuid,
    ) -> Result<Route, AppError>
    where
        E: PgExecutor<'e>,
    {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, from_city_id, to_city_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (from_city_id, to_city_id)
            DO UPDATE SET from_city_id = EXCLUDED.from_city_id
            RETURNING id, from_city_id, to_city_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(from_city_id)
        .bind(to_city_id)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            error!(
                "Error resolving route ({}, {}): {}",
                from_city_id, to_city_id, e
            );
            AppError::Database(e)
        })?;

        Ok(route)
    }
}
