//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos,
//! conversión de tipos y las invariantes temporales de los viajes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::utils::errors::AppError;

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "{}: '{}' is not a valid date (expected YYYY-MM-DD)",
            field, value
        ))
    })
}

/// Validar y convertir string a hora del día (HH:MM o HH:MM:SS)
pub fn parse_time(field: &str, value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| {
            AppError::Validation(format!(
                "{}: '{}' is not a valid time (expected HH:MM)",
                field, value
            ))
        })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    field: &str,
    value: T,
) -> Result<(), AppError> {
    if value <= T::zero() {
        return Err(AppError::Validation(format!(
            "{} must be positive (got {})",
            field, value
        )));
    }
    Ok(())
}

/// Validar la invariante temporal de un viaje: la llegada debe ser
/// estrictamente posterior a la salida. Se comprueba antes de escribir nada.
pub fn validate_time_order(
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
) -> Result<(), AppError> {
    if arrival_time <= departure_time {
        return Err(AppError::Validation(
            "La hora de llegada debe ser posterior a la hora de salida".to_string(),
        ));
    }
    Ok(())
}

/// Derivar la duración del viaje en minutos a partir de los dos timestamps.
/// Cuando ambos están presentes este valor siempre pisa el introducido a mano.
pub fn derive_duration_minutes(
    departure_time: DateTime<Utc>,
    arrival_time: DateTime<Utc>,
) -> i32 {
    let seconds = (arrival_time - departure_time).num_seconds();
    (seconds as f64 / 60.0).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("date_from", "2024-01-15").is_ok());
        assert!(parse_date("date_from", "2024/01/15").is_err());
    }

    #[test]
    fn test_parse_time_both_formats() {
        assert_eq!(
            parse_time("time_from", "08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
        assert!(parse_time("time_from", "08:30:15").is_ok());
        assert!(parse_time("time_from", "8h30").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("seats_total", 5).is_ok());
        assert!(validate_positive("seats_total", 0).is_err());
        assert!(validate_positive("seats_total", -5).is_err());
    }

    #[test]
    fn test_time_order_rejects_equal_and_earlier_arrival() {
        let departure = ts("2024-06-01T08:00:00");
        assert!(validate_time_order(departure, ts("2024-06-01T08:00:00")).is_err());
        assert!(validate_time_order(departure, ts("2024-06-01T07:59:00")).is_err());
        assert!(validate_time_order(departure, ts("2024-06-01T08:01:00")).is_ok());
    }

    #[test]
    fn test_duration_derivation() {
        // 08:00 -> 12:30 son exactamente 270 minutos
        let departure = ts("2024-06-01T08:00:00");
        let arrival = ts("2024-06-01T12:30:00");
        assert_eq!(derive_duration_minutes(departure, arrival), 270);
    }

    #[test]
    fn test_duration_rounds_partial_minutes() {
        let departure = ts("2024-06-01T08:00:00");
        assert_eq!(derive_duration_minutes(departure, ts("2024-06-01T08:10:31")), 11);
        assert_eq!(derive_duration_minutes(departure, ts("2024-06-01T08:10:29")), 10);
    }
}
