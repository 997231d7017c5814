use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::route_dto::RouteResponse;
use crate::models::fare::Fare;
use crate::models::trip::{Trip, TripListRow};

/// Request de alta/edición de viaje. El mismo payload sirve para crear y
/// para actualizar: la edición es de campos completos, no parcial.
///
/// La ruta llega o bien como `route_id` ya resuelto o bien como par de
/// nombres de ciudad (`from_city`/`to_city`) que el backend resuelve.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveTripRequest {
    pub route_id: Option<Uuid>,

    #[validate(length(min = 2, max = 100))]
    pub from_city: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub to_city: Option<String>,

    pub company_id: Uuid,
    pub transport_type_id: Uuid,
    pub departure_station_id: Uuid,
    pub arrival_station_id: Uuid,

    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,

    /// Solo se respeta si faltara alguno de los dos timestamps; con ambos
    /// presentes el valor derivado siempre lo pisa.
    pub duration_minutes: Option<i32>,

    #[validate(range(min = 1))]
    pub seats_total: i32,

    pub price: Option<Decimal>,

    #[validate(length(min = 3, max = 3))]
    pub currency: Option<String>,

    #[validate(length(max = 50))]
    pub bus_number: Option<String>,

    #[validate(length(max = 150))]
    pub driver_name: Option<String>,

    pub equipment: Option<String>,
    pub cancellation_policy: Option<String>,
    pub extra_info: Option<String>,

    pub is_active: Option<bool>,
}

// Query params del listado admin: filtros de fecha, franja horaria,
// ciudad y empresa. `lang` solo lo usa el export CSV.
#[derive(Debug, Default, Deserialize)]
pub struct TripQuery {
    pub show_all: Option<bool>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub time_from: Option<String>,
    pub time_to: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
    pub lang: Option<String>,
}

// Query params de GET /api/fares
#[derive(Debug, Deserialize)]
pub struct FaresQuery {
    pub trip_id: Uuid,
}

// Response de tarifa
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub id: String,
    pub trip_id: String,
    pub price: String,
    pub currency: String,
}

impl From<Fare> for FareResponse {
    fn from(fare: Fare) -> Self {
        Self {
            id: fare.id.to_string(),
            trip_id: fare.trip_id.to_string(),
            price: fare.price.to_string(),
            currency: fare.currency,
        }
    }
}

// Response de viaje para listados
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: String,
    pub route_id: String,
    pub from_city: String,
    pub to_city: String,
    pub company_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: i32,
    pub seats_total: i32,
    pub price: Option<String>,
    pub currency: Option<String>,
    pub is_active: bool,
}

impl From<TripListRow> for TripResponse {
    fn from(row: TripListRow) -> Self {
        Self {
            id: row.id.to_string(),
            route_id: row.route_id.to_string(),
            from_city: row.from_city,
            to_city: row.to_city,
            company_name: row.company_name,
            departure_time: row.departure_time.to_rfc3339(),
            arrival_time: row.arrival_time.to_rfc3339(),
            duration_minutes: row.duration_minutes,
            seats_total: row.seats_total,
            price: row.price.map(|p| p.to_string()),
            currency: row.currency,
            is_active: row.is_active,
        }
    }
}

// Response de detalle: viaje con su ruta resuelta y su tarifa principal.
// La tarifa puede faltar; el precio queda vacío en ese caso.
#[derive(Debug, Serialize)]
pub struct TripDetailResponse {
    pub id: String,
    pub route: RouteResponse,
    pub from_city: String,
    pub to_city: String,
    pub company_id: String,
    pub transport_type_id: String,
    pub departure_station_id: String,
    pub arrival_station_id: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: i32,
    pub seats_total: i32,
    pub bus_number: Option<String>,
    pub driver_name: Option<String>,
    pub equipment: Option<String>,
    pub cancellation_policy: Option<String>,
    pub extra_info: Option<String>,
    pub is_active: bool,
    pub fare: Option<FareResponse>,
}

impl TripDetailResponse {
    pub fn build(
        trip: Trip,
        route: crate::models::route::Route,
        from_city: String,
        to_city: String,
        fare: Option<Fare>,
    ) -> Self {
        Self {
            id: trip.id.to_string(),
            route: RouteResponse::from(route),
            from_city,
            to_city,
            company_id: trip.company_id.to_string(),
            transport_type_id: trip.transport_type_id.to_string(),
            departure_station_id: trip.departure_station_id.to_string(),
            arrival_station_id: trip.arrival_station_id.to_string(),
            departure_time: trip.departure_time.to_rfc3339(),
            arrival_time: trip.arrival_time.to_rfc3339(),
            duration_minutes: trip.duration_minutes,
            seats_total: trip.seats_total,
            bus_number: trip.bus_number,
            driver_name: trip.driver_name,
            equipment: trip.equipment,
            cancellation_policy: trip.cancellation_policy,
            extra_info: trip.extra_info,
            is_active: trip.is_active,
            fare: fare.map(FareResponse::from),
        }
    }
}
