//! Modelo de Route
//!
//! Una ruta queda identificada por el par ordenado (from_city_id, to_city_id).
//! El par tiene un índice único en la tabla: nunca existen dos filas para el
//! mismo par ordenado. (A,B) y (B,A) son rutas distintas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub created_at: DateTime<Utc>,
}
