//! Modelo de TransportType

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// TransportType principal - mapea exactamente a la tabla transport_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransportType {
    pub id: Uuid,
    pub name: String,
}
