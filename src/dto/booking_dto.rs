use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::booking::BookingListRow;

// Request para cambiar el estado de una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(length(min = 1))]
    pub booking_status: String,
}

// Response de reserva para el listado admin
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub trip_id: String,
    pub username: String,
    pub from_city: String,
    pub to_city: String,
    pub departure_time: String,
    pub seats: i32,
    pub booking_status: String,
    pub created_at: String,
}

impl From<BookingListRow> for BookingResponse {
    fn from(row: BookingListRow) -> Self {
        Self {
            id: row.id.to_string(),
            trip_id: row.trip_id.to_string(),
            username: row.username,
            from_city: row.from_city,
            to_city: row.to_city,
            departure_time: row.departure_time.to_rfc3339(),
            seats: row.seats,
            booking_status: row.booking_status,
            created_at: row.created_at.to_rfc3339(),
        }
    }
}
