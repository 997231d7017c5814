//! Controller de reservas
//!
//! Listado y transición de estado; la capacidad de asientos se gestiona
//! en el flujo de venta, no aquí.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingResponse, UpdateBookingStatusRequest};
use crate::dto::company_dto::ApiResponse;
use crate::models::booking::{Booking, BOOKING_STATUSES};
use crate::repositories::booking_repository::BookingRepository;
use crate::utils::errors::AppError;

pub struct BookingController {
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<BookingResponse>, AppError> {
        let rows = self.repository.list().await?;
        Ok(rows.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateBookingStatusRequest,
    ) -> Result<ApiResponse<Booking>, AppError> {
        request.validate()?;

        if !BOOKING_STATUSES.contains(&request.booking_status.as_str()) {
            return Err(AppError::Validation(format!(
                "booking_status: '{}' no es un estado válido",
                request.booking_status
            )));
        }

        let booking = self
            .repository
            .update_status(id, &request.booking_status)
            .await?;

        Ok(ApiResponse::success_with_message(
            booking,
            "Estado de la reserva actualizado".to_string(),
        ))
    }
}
