//! Modelo de Fare
//!
//! El contrato actual es una sola tarifa (precio + moneda) por viaje;
//! la tabla lleva un índice único sobre trip_id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Fare principal - mapea exactamente a la tabla fares
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fare {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub price: Decimal,
    pub currency: String,
}
