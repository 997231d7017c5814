//! Filtros del listado admin de viajes
//!
//! Semántica de referencia de los filtros: los límites de fecha comparan
//! solo la parte de calendario de la hora de salida (ambos extremos
//! inclusive, date_to cuenta como fin de día); los límites horarios
//! comparan solo la hora del día, también inclusive; ciudad y empresa son
//! substring case-insensitive (la ciudad contra origen O destino). Todos
//! los filtros presentes se combinan con AND.
//!
//! El listado evalúa estos filtros en SQL (TripRepository::list); este
//! módulo es el predicado equivalente en memoria, que usa el export CSV
//! sobre la lista ya cargada. Ambos deben mantenerse alineados.

use chrono::{NaiveDate, NaiveTime};

use crate::dto::trip_dto::TripQuery;
use crate::models::trip::TripListRow;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_date, parse_time};

/// Filtros ya parseados y tipados
#[derive(Debug, Default, Clone)]
pub struct TripFilterSet {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    pub city: Option<String>,
    pub company: Option<String>,
}

impl TripFilterSet {
    /// Parsear los query params del listado; los campos vacíos no filtran
    pub fn from_query(query: &TripQuery) -> Result<Self, AppError> {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            date_from: non_empty(&query.date_from)
                .map(|v| parse_date("date_from", &v))
                .transpose()?,
            date_to: non_empty(&query.date_to)
                .map(|v| parse_date("date_to", &v))
                .transpose()?,
            time_from: non_empty(&query.time_from)
                .map(|v| parse_time("time_from", &v))
                .transpose()?,
            time_to: non_empty(&query.time_to)
                .map(|v| parse_time("time_to", &v))
                .transpose()?,
            city: non_empty(&query.city).map(|v| v.to_lowercase()),
            company: non_empty(&query.company).map(|v| v.to_lowercase()),
        })
    }

    /// Predicado puro sobre una fila del listado
    pub fn matches(&self, row: &TripListRow) -> bool {
        let departure_date = row.departure_time.date_naive();
        let departure_tod = row.departure_time.time();

        if let Some(date_from) = self.date_from {
            if departure_date < date_from {
                return false;
            }
        }
        if let Some(date_to) = self.date_to {
            if departure_date > date_to {
                return false;
            }
        }
        if let Some(time_from) = self.time_from {
            if departure_tod < time_from {
                return false;
            }
        }
        if let Some(time_to) = self.time_to {
            if departure_tod > time_to {
                return false;
            }
        }
        if let Some(ref city) = self.city {
            let from_match = row.from_city.to_lowercase().contains(city);
            let to_match = row.to_city.to_lowercase().contains(city);
            if !from_match && !to_match {
                return false;
            }
        }
        if let Some(ref company) = self.company {
            if !row.company_name.to_lowercase().contains(company) {
                return false;
            }
        }

        true
    }

    /// Filtrar una lista ya cargada
    pub fn apply(&self, rows: Vec<TripListRow>) -> Vec<TripListRow> {
        rows.into_iter().filter(|row| self.matches(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};
    use uuid::Uuid;

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .unwrap()
            .and_utc()
    }

    fn row(from: &str, to: &str, company: &str, departure: &str) -> TripListRow {
        TripListRow {
            id: Uuid::new_v4(),
            route_id: Uuid::new_v4(),
            from_city: from.to_string(),
            to_city: to.to_string(),
            company_name: company.to_string(),
            departure_time: ts(departure),
            arrival_time: ts(departure) + chrono::Duration::hours(4),
            duration_minutes: 240,
            seats_total: 40,
            is_active: true,
            price: None,
            currency: None,
        }
    }

    /// Cinco viajes fijos con salidas, ciudades y empresas conocidas
    fn fixture() -> Vec<TripListRow> {
        vec![
            row("Damascus", "Aleppo", "Al-Kadmous", "2024-06-01T08:00:00"),
            row("Damascus", "Homs", "Al-Kadmous", "2024-06-01T22:30:00"),
            row("Aleppo", "Latakia", "Al-Ahliah", "2024-06-02T06:15:00"),
            row("Homs", "Tartus", "Damas Tours", "2024-06-03T14:00:00"),
            row("Latakia", "Damascus", "Al-Ahliah", "2024-06-05T08:00:00"),
        ]
    }

    fn filters(f: impl FnOnce(&mut TripFilterSet)) -> TripFilterSet {
        let mut set = TripFilterSet::default();
        f(&mut set);
        set
    }

    fn from_cities(rows: &[TripListRow]) -> Vec<&str> {
        rows.iter().map(|r| r.from_city.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let set = TripFilterSet::default();
        assert_eq!(set.apply(fixture()).len(), 5);
    }

    #[test]
    fn test_date_bounds_are_inclusive_and_ignore_time() {
        let set = filters(|f| {
            f.date_from = Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
            f.date_to = Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        });
        // Ambos viajes del 1 de junio, sin importar la hora
        let result = set.apply(fixture());
        assert_eq!(result.len(), 2);
        assert_eq!(from_cities(&result), vec!["Damascus", "Damascus"]);
    }

    #[test]
    fn test_date_range_spanning_days() {
        let set = filters(|f| {
            f.date_from = Some(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
            f.date_to = Some(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        });
        let result = set.apply(fixture());
        assert_eq!(from_cities(&result), vec!["Aleppo", "Homs"]);
    }

    #[test]
    fn test_time_bounds_are_inclusive_at_boundary() {
        // Un viaje que sale exactamente en el límite pasa el filtro
        let set = filters(|f| {
            f.time_from = Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
            f.time_to = Some(NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        });
        let result = set.apply(fixture());
        assert_eq!(from_cities(&result), vec!["Damascus", "Homs", "Latakia"]);
    }

    #[test]
    fn test_time_lower_bound_only() {
        let set = filters(|f| {
            f.time_from = Some(NaiveTime::from_hms_opt(14, 1, 0).unwrap());
        });
        let result = set.apply(fixture());
        assert_eq!(from_cities(&result), vec!["Damascus"]);
        assert_eq!(result[0].to_city, "Homs");
    }

    #[test]
    fn test_city_substring_matches_either_side() {
        let set = filters(|f| f.city = Some("alep".to_string()));
        let result = set.apply(fixture());
        // "alep" matchea Aleppo tanto de origen como de destino
        assert_eq!(result.len(), 2);
        assert!(result.iter().any(|r| r.to_city == "Aleppo"));
        assert!(result.iter().any(|r| r.from_city == "Aleppo"));
    }

    #[test]
    fn test_company_substring_case_insensitive() {
        let set = filters(|f| f.company = Some("ahliah".to_string()));
        let result = set.apply(fixture());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.company_name == "Al-Ahliah"));
    }

    #[test]
    fn test_filters_combine_with_and() {
        let set = filters(|f| {
            f.date_from = Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
            f.date_to = Some(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
            f.city = Some("damascus".to_string());
            f.company = Some("kadmous".to_string());
        });
        let result = set.apply(fixture());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.from_city == "Damascus"));
    }

    #[test]
    fn test_from_query_ignores_empty_strings() {
        let query = TripQuery {
            city: Some("  ".to_string()),
            company: Some(String::new()),
            ..Default::default()
        };
        let set = TripFilterSet::from_query(&query).unwrap();
        assert!(set.city.is_none());
        assert!(set.company.is_none());
    }

    #[test]
    fn test_from_query_rejects_bad_date() {
        let query = TripQuery {
            date_from: Some("01/06/2024".to_string()),
            ..Default::default()
        };
        assert!(TripFilterSet::from_query(&query).is_err());
    }
}
