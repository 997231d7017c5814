use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingListRow};
use crate::utils::errors::AppError;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado admin con los campos de display del viaje y el usuario
    pub async fn list(&self) -> Result<Vec<BookingListRow>, AppError> {
        let rows = sqlx::query_as::<_, BookingListRow>(
            r#"
            SELECT b.id, b.trip_id, u.username,
                   cf.name AS from_city, ct.name AS to_city,
                   t.departure_time, b.seats, b.booking_status, b.created_at
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            JOIN trips t ON t.id = b.trip_id
            JOIN routes r ON r.id = t.route_id
            JOIN cities cf ON cf.id = r.from_city_id
            JOIN cities ct ON ct.id = r.to_city_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Error listing bookings: {}", e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET booking_status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Error updating booking {} status: {}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        Ok(booking)
    }
}
