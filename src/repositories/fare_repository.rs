use rust_decimal::Decimal;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::fare::Fare;
use crate::utils::errors::AppError;

pub struct FareRepository {
    pool: PgPool,
}

impl FareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tarifas de un viaje. El contrato es cero o una.
    pub async fn list_by_trip(&self, trip_id: Uuid) -> Result<Vec<Fare>, AppError> {
        let fares = sqlx::query_as::<_, Fare>(
            "SELECT id, trip_id, price, currency FROM fares WHERE trip_id = $1",
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing fares for trip {}: {}", trip_id, e);
            AppError::Database(e)
        })?;

        Ok(fares)
    }

    pub async fn find_by_trip(&self, trip_id: Uuid) -> Result<Option<Fare>, AppError> {
        let fare = sqlx::query_as::<_, Fare>(
            "SELECT id, trip_id, price, currency FROM fares WHERE trip_id = $1",
        )
        .bind(trip_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error finding fare for trip {}: {}", trip_id, e);
            AppError::Database(e)
        })?;

        Ok(fare)
    }

    /// Upsert atómico de la tarifa principal del viaje, con el índice
    /// único sobre trip_id como clave natural. Nunca hay lectura previa:
    /// un solo statement decide insertar o actualizar.
    pub async fn upsert_on<'e, E>(
        executor: E,
        trip_id: Uuid,
        price: Decimal,
        currency: &str,
    ) -> Result<Fare, AppError>
    where
        E: PgExecutor<'e>,
    {
        let fare = sqlx::query_as::<_, Fare>(
            r#"
            INSERT INTO fares (id, trip_id, price, currency)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (trip_id)
            DO UPDATE SET price = EXCLUDED.price, currency = EXCLUDED.currency
            RETURNING id, trip_id, price, currency
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trip_id)
        .bind(price)
        .bind(currency)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            error!("Error upserting fare for trip {}: {}", trip_id, e);
            AppError::Database(e)
        })?;

        Ok(fare)
    }
}
