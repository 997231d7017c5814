use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::station::Station;
use crate::models::transport_type::TransportType;

// Query params para listar terminales
#[derive(Debug, Deserialize)]
pub struct StationsQuery {
    pub city_id: Option<Uuid>,
}

// Response de terminal
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub id: Uuid,
    pub city_id: Uuid,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            city_id: station.city_id,
            name: station.name,
        }
    }
}

// Response de tipo de transporte
#[derive(Debug, Serialize)]
pub struct TransportTypeResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<TransportType> for TransportTypeResponse {
    fn from(tt: TransportType) -> Self {
        Self { id: tt.id, name: tt.name }
    }
}
