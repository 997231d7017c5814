use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::route::Route;

// Request para resolver (o crear) la ruta de un par de ciudades
#[derive(Debug, Deserialize)]
pub struct ResolveRouteRequest {
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
}

// Response de ruta
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub created_at: String,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            from_city_id: route.from_city_id,
            to_city_id: route.to_city_id,
            created_at: route.created_at.to_rfc3339(),
        }
    }
}
