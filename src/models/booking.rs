//! Modelo de Booking
//!
//! Las reservas solo se listan y cambian de estado desde el back-office;
//! la contabilidad de asientos disponibles vive fuera de este núcleo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub user_id: Uuid,
    pub seats: i32,
    pub booking_status: String,
    pub created_at: DateTime<Utc>,
}

/// Fila de listado con los campos de display del viaje y el usuario
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingListRow {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub username: String,
    pub from_city: String,
    pub to_city: String,
    pub departure_time: DateTime<Utc>,
    pub seats: i32,
    pub booking_status: String,
    pub created_at: DateTime<Utc>,
}

/// Transiciones de estado permitidas para una reserva
pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "cancelled", "completed"];
