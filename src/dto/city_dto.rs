use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::city::City;

// Query params para listar ciudades
#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    pub limit: Option<i64>,
}

// Query params para autocompletar ciudades
#[derive(Debug, Deserialize)]
pub struct MatchCitiesQuery {
    pub q: String,
}

// Response de ciudad
#[derive(Debug, Serialize)]
pub struct CityResponse {
    pub id: Uuid,
    pub name: String,
    pub country_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            country_code: city.country_code,
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}
