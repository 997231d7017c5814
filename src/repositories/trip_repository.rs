use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::fare::Fare;
use crate::models::trip::{Trip, TripListRow};
use crate::repositories::fare_repository::FareRepository;
use crate::services::trip_filter::TripFilterSet;
use crate::utils::errors::AppError;

/// Campos persistibles de un viaje, ya validados y con la duración derivada
#[derive(Debug)]
pub struct TripWrite {
    pub route_id: Uuid,
    pub company_id: Uuid,
    pub transport_type_id: Uuid,
    pub departure_station_id: Uuid,
    pub arrival_station_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub seats_total: i32,
    pub bus_number: Option<String>,
    pub driver_name: Option<String>,
    pub equipment: Option<String>,
    pub cancellation_policy: Option<String>,
    pub extra_info: Option<String>,
    pub is_active: bool,
    /// Tarifa principal (precio, moneda); None deja la existente intacta
    pub fare: Option<(Decimal, String)>,
}

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar el viaje y, si llegó precio, su tarifa, en una transacción:
    /// nunca queda un viaje a medias sin su tarifa.
    pub async fn create(&self, data: &TripWrite) -> Result<(Trip, Option<Fare>), AppError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Error starting transaction for trip create: {}", e);
            AppError::Database(e)
        })?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, route_id, company_id, transport_type_id,
                departure_station_id, arrival_station_id,
                departure_time, arrival_time, duration_minutes, seats_total,
                bus_number, driver_name, equipment, cancellation_policy,
                extra_info, is_active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.route_id)
        .bind(data.company_id)
        .bind(data.transport_type_id)
        .bind(data.departure_station_id)
        .bind(data.arrival_station_id)
        .bind(data.departure_time)
        .bind(data.arrival_time)
        .bind(data.duration_minutes)
        .bind(data.seats_total)
        .bind(&data.bus_number)
        .bind(&data.driver_name)
        .bind(&data.equipment)
        .bind(&data.cancellation_policy)
        .bind(&data.extra_info)
        .bind(data.is_active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("Error creating trip: {}", e);
            AppError::Database(e)
        })?;

        let fare = match &data.fare {
            Some((price, currency)) => {
                Some(FareRepository::upsert_on(&mut *tx, trip.id, *price, currency).await?)
            }
            None => None,
        };

        tx.commit().await.map_err(|e| {
            error!("Error committing trip create: {}", e);
            AppError::Database(e)
        })?;

        Ok((trip, fare))
    }

    /// Actualización de campos completos del viaje, con el mismo contrato
    /// transaccional que el alta.
    pub async fn update(
        &self,
        id: Uuid,
        data: &TripWrite,
    ) -> Result<(Trip, Option<Fare>), AppError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!("Error starting transaction for trip update {}: {}", id, e);
            AppError::Database(e)
        })?;

        let trip = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET route_id = $2, company_id = $3, transport_type_id = $4,
                departure_station_id = $5, arrival_station_id = $6,
                departure_time = $7, arrival_time = $8, duration_minutes = $9,
                seats_total = $10, bus_number = $11, driver_name = $12,
                equipment = $13, cancellation_policy = $14, extra_info = $15,
                is_active = $16
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.route_id)
        .bind(data.company_id)
        .bind(data.transport_type_id)
        .bind(data.departure_station_id)
        .bind(data.arrival_station_id)
        .bind(data.departure_time)
        .bind(data.arrival_time)
        .bind(data.duration_minutes)
        .bind(data.seats_total)
        .bind(&data.bus_number)
        .bind(&data.driver_name)
        .bind(&data.equipment)
        .bind(&data.cancellation_policy)
        .bind(&data.extra_info)
        .bind(data.is_active)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("Error updating trip {}: {}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

        let fare = match &data.fare {
            Some((price, currency)) => {
                Some(FareRepository::upsert_on(&mut *tx, trip.id, *price, currency).await?)
            }
            None => None,
        };

        tx.commit().await.map_err(|e| {
            error!("Error committing trip update {}: {}", id, e);
            AppError::Database(e)
        })?;

        Ok((trip, fare))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("Error finding trip {}: {}", id, e);
                AppError::Database(e)
            })?;

        Ok(trip)
    }

    /// Listado admin con los campos de display resueltos y los filtros
    /// evaluados en el servidor. Las cláusulas deben mantenerse alineadas
    /// con TripFilterSet::matches.
    pub async fn list(
        &self,
        show_all: bool,
        filters: &TripFilterSet,
    ) -> Result<Vec<TripListRow>, AppError> {
        let rows = sqlx::query_as::<_, TripListRow>(
            r#"
            SELECT t.id, t.route_id,
                   cf.name AS from_city, ct.name AS to_city,
                   co.name AS company_name,
                   t.departure_time, t.arrival_time, t.duration_minutes,
                   t.seats_total, t.is_active,
                   f.price, f.currency
            FROM trips t
            JOIN routes r ON r.id = t.route_id
            JOIN cities cf ON cf.id = r.from_city_id
            JOIN cities ct ON ct.id = r.to_city_id
            JOIN companies co ON co.id = t.company_id
            LEFT JOIN fares f ON f.trip_id = t.id
            WHERE ($1 OR t.is_active)
              AND ($2::date IS NULL OR (t.departure_time AT TIME ZONE 'UTC')::date >= $2)
              AND ($3::date IS NULL OR (t.departure_time AT TIME ZONE 'UTC')::date <= $3)
              AND ($4::time IS NULL OR (t.departure_time AT TIME ZONE 'UTC')::time >= $4)
              AND ($5::time IS NULL OR (t.departure_time AT TIME ZONE 'UTC')::time <= $5)
              AND ($6::text IS NULL
                   OR cf.name ILIKE '%' || $6 || '%'
                   OR ct.name ILIKE '%' || $6 || '%')
              AND ($7::text IS NULL OR co.name ILIKE '%' || $7 || '%')
            ORDER BY t.departure_time
            "#,
        )
        .bind(show_all)
        .bind(filters.date_from)
        .bind(filters.date_to)
        .bind(filters.time_from)
        .bind(filters.time_to)
        .bind(&filters.city)
        .bind(&filters.company)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing trips: {}", e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Retirar el viaje de la búsqueda pública sin borrar nada
    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE trips SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error deactivating trip {}: {}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }

    /// Borrado permanente. La tarifa cae por el ON DELETE CASCADE.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Error deleting trip {}: {}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }
}
