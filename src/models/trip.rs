//! Modelo de Trip
//!
//! Un viaje está ligado a una ruta, una empresa, un tipo de transporte,
//! dos terminales y dos timestamps. Invariantes: la llegada es posterior
//! a la salida y duration_minutes se deriva de ambos timestamps.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Trip principal - mapea exactamente a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
}

/// Fila de listado con los campos de display ya resueltos
/// (ciudades de la ruta, nombre de la empresa y tarifa principal).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TripListRow {
    pub id: Uuid,
    pub route_id: Uuid,
    pub from_city: String,
    pub to_city: String,
    pub company_name: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub seats_total: i32,
    pub is_active: bool,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
}
