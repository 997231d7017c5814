//! Modelo de Station
//!
//! Terminales de salida/llegada, asociadas a una ciudad.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Station principal - mapea exactamente a la tabla stations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Station {
    pub id: Uuid,
    pub city_id: Uuid,
    pub name: String,
}
