//! Controller de viajes
//!
//! Orquesta el flujo de alta/edición: validar la invariante temporal,
//! resolver la ruta del par de ciudades, derivar la duración y persistir
//! viaje + tarifa. Toda la validación ocurre antes de la primera escritura.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::company_dto::ApiResponse;
use crate::dto::trip_dto::{
    FareResponse, SaveTripRequest, TripDetailResponse, TripQuery, TripResponse,
};
use crate::models::city::City;
use crate::models::fare::Fare;
use crate::models::trip::Trip;
use crate::repositories::city_repository::CityRepository;
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::fare_repository::FareRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::station_repository::StationRepository;
use crate::repositories::transport_type_repository::TransportTypeRepository;
use crate::repositories::trip_repository::{TripRepository, TripWrite};
use crate::services::city_alias;
use crate::services::csv_export::{export_trips_csv, CsvLang};
use crate::services::trip_filter::TripFilterSet;
use crate::utils::errors::{field_validation_error, not_found_error, AppError};
use crate::utils::validation::{derive_duration_minutes, validate_positive, validate_time_order};
use validator::Validate;

const DEFAULT_CURRENCY: &str = "SYP";

pub struct TripController {
    trips: TripRepository,
    routes: RouteRepository,
    cities: CityRepository,
    companies: CompanyRepository,
    stations: StationRepository,
    transport_types: TransportTypeRepository,
    fares: FareRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trips: TripRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            cities: CityRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool.clone()),
            stations: StationRepository::new(pool.clone()),
            transport_types: TransportTypeRepository::new(pool.clone()),
            fares: FareRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: SaveTripRequest,
    ) -> Result<ApiResponse<TripDetailResponse>, AppError> {
        request.validate()?;

        let data = self.prepare_write(&request, true).await?;
        let (trip, fare) = self.trips.create(&data).await?;
        let detail = self.assemble_detail(trip, fare).await?;

        Ok(ApiResponse::success_with_message(
            detail,
            "Viaje creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: SaveTripRequest,
    ) -> Result<ApiResponse<TripDetailResponse>, AppError> {
        request.validate()?;

        // El viaje puede haber sido borrado por otra sesión del panel
        let current = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let data = self.prepare_write(&request, current.is_active).await?;
        let (trip, fare) = self.trips.update(id, &data).await?;

        // Sin precio en el payload la tarifa existente queda intacta;
        // recuperarla para la respuesta
        let fare = match fare {
            Some(fare) => Some(fare),
            None => self.fares.find_by_trip(trip.id).await?,
        };
        let detail = self.assemble_detail(trip, fare).await?;

        Ok(ApiResponse::success_with_message(
            detail,
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TripDetailResponse, AppError> {
        let trip = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let fare = self.fares.find_by_trip(trip.id).await?;
        self.assemble_detail(trip, fare).await
    }

    pub async fn list(&self, query: &TripQuery) -> Result<Vec<TripResponse>, AppError> {
        let filters = TripFilterSet::from_query(query)?;
        let show_all = query.show_all.unwrap_or(false);

        let rows = self.trips.list(show_all, &filters).await?;
        Ok(rows.into_iter().map(TripResponse::from).collect())
    }

    /// Export CSV del panel: filtra en memoria la lista ya cargada con el
    /// mismo conjunto de filtros que el listado.
    pub async fn export_csv(&self, query: &TripQuery) -> Result<String, AppError> {
        let filters = TripFilterSet::from_query(query)?;
        let show_all = query.show_all.unwrap_or(false);

        let rows = self.trips.list(show_all, &TripFilterSet::default()).await?;
        let filtered = filters.apply(rows);

        export_trips_csv(&filtered, CsvLang::from_code(query.lang.as_deref()))
    }

    pub async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.trips.deactivate(id).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.trips.delete(id).await
    }

    pub async fn list_fares(&self, trip_id: Uuid) -> Result<Vec<FareResponse>, AppError> {
        let fares = self.fares.list_by_trip(trip_id).await?;
        Ok(fares.into_iter().map(FareResponse::from).collect())
    }

    /// Validar el request completo y dejarlo listo para persistir. No
    /// escribe nada salvo, si hace falta, la resolución idempotente de la
    /// ruta (un upsert que puede repetirse sin efectos).
    async fn prepare_write(
        &self,
        request: &SaveTripRequest,
        default_active: bool,
    ) -> Result<TripWrite, AppError> {
        validate_time_order(request.departure_time, request.arrival_time)?;
        validate_positive("seats_total", request.seats_total)?;

        // FKs referenciadas: el error nombra el campo que falta
        if self.companies.find_by_id(request.company_id).await?.is_none() {
            return Err(field_validation_error(
                "company_id",
                &format!("company '{}' does not exist", request.company_id),
            ));
        }
        if self
            .transport_types
            .find_by_id(request.transport_type_id)
            .await?
            .is_none()
        {
            return Err(field_validation_error(
                "transport_type_id",
                &format!("transport type '{}' does not exist", request.transport_type_id),
            ));
        }
        if self
            .stations
            .find_by_id(request.departure_station_id)
            .await?
            .is_none()
        {
            return Err(field_validation_error(
                "departure_station_id",
                &format!("station '{}' does not exist", request.departure_station_id),
            ));
        }
        if self
            .stations
            .find_by_id(request.arrival_station_id)
            .await?
            .is_none()
        {
            return Err(field_validation_error(
                "arrival_station_id",
                &format!("station '{}' does not exist", request.arrival_station_id),
            ));
        }

        let route_id = self.resolve_route_id(request).await?;

        // Con ambos timestamps presentes la duración derivada siempre pisa
        // el valor introducido a mano
        let duration_minutes =
            derive_duration_minutes(request.departure_time, request.arrival_time);
        if let Some(manual) = request.duration_minutes {
            if manual != duration_minutes {
                tracing::debug!(
                    "duration_minutes manual ({}) ignorado; se usa el derivado ({})",
                    manual,
                    duration_minutes
                );
            }
        }

        let fare = request.price.map(|price| {
            let currency = request
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
            (price, currency)
        });

        Ok(TripWrite {
            route_id,
            company_id: request.company_id,
            transport_type_id: request.transport_type_id,
            departure_station_id: request.departure_station_id,
            arrival_station_id: request.arrival_station_id,
            departure_time: request.departure_time,
            arrival_time: request.arrival_time,
            duration_minutes,
            seats_total: request.seats_total,
            bus_number: request.bus_number.clone(),
            driver_name: request.driver_name.clone(),
            equipment: request.equipment.clone(),
            cancellation_policy: request.cancellation_policy.clone(),
            extra_info: request.extra_info.clone(),
            is_active: request.is_active.unwrap_or(default_active),
            fare,
        })
    }

    /// La ruta llega resuelta (route_id) o como par de nombres de ciudad
    async fn resolve_route_id(&self, request: &SaveTripRequest) -> Result<Uuid, AppError> {
        if let Some(route_id) = request.route_id {
            return self
                .routes
                .find_by_id(route_id)
                .await?
                .map(|route| route.id)
                .ok_or_else(|| {
                    field_validation_error(
                        "route_id",
                        &format!("route '{}' does not exist", route_id),
                    )
                });
        }

        let from_name = request.from_city.as_deref().ok_or_else(|| {
            AppError::Validation(
                "from_city: requerido cuando no se envía route_id".to_string(),
            )
        })?;
        let to_name = request.to_city.as_deref().ok_or_else(|| {
            AppError::Validation("to_city: requerido cuando no se envía route_id".to_string())
        })?;

        let from_city = self.resolve_city(from_name).await?;
        let to_city = self.resolve_city(to_name).await?;

        if from_city.id == to_city.id {
            return Err(AppError::Validation(
                "La ciudad de origen y la de destino deben ser diferentes".to_string(),
            ));
        }

        let route = self
            .routes
            .resolve_or_create(from_city.id, to_city.id)
            .await?;
        Ok(route.id)
    }

    /// Resolución de nombre de ciudad: match exacto en inglés y, si no,
    /// el alias árabe de la tabla estática
    async fn resolve_city(&self, name: &str) -> Result<City, AppError> {
        if let Some(city) = self.cities.find_by_name(name).await? {
            return Ok(city);
        }

        if let Some(canonical) = city_alias::canonical_english(name) {
            if let Some(city) = self.cities.find_by_name(canonical).await? {
                return Ok(city);
            }
        }

        Err(AppError::NotFound(format!("City '{}' not found", name)))
    }

    async fn assemble_detail(
        &self,
        trip: Trip,
        fare: Option<Fare>,
    ) -> Result<TripDetailResponse, AppError> {
        let route = self
            .routes
            .find_by_id(trip.route_id)
            .await?
            .ok_or_else(|| not_found_error("Route", &trip.route_id.to_string()))?;

        let from_city = self
            .cities
            .find_by_id(route.from_city_id)
            .await?
            .ok_or_else(|| not_found_error("City", &route.from_city_id.to_string()))?;
        let to_city = self
            .cities
            .find_by_id(route.to_city_id)
            .await?
            .ok_or_else(|| not_found_error("City", &route.to_city_id.to_string()))?;

        Ok(TripDetailResponse::build(
            trip,
            route,
            from_city.name,
            to_city.name,
            fare,
        ))
    }
}
