//! Modelo de City
//!
//! Datos de referencia inmutables: las ciudades se cargan con el seed
//! y solo se consultan.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// City principal - mapea exactamente a la tabla cities
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
