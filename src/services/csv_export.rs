//! Export CSV del listado admin de viajes
//!
//! Genera CSV estilo RFC4180 con todos los campos entrecomillados y BOM
//! UTF-8 al inicio para que las hojas de cálculo detecten la codificación.
//! Las cabeceras se localizan según el idioma activo del panel.

use crate::models::trip::TripListRow;
use crate::utils::errors::AppError;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Idioma de las cabeceras del export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvLang {
    En,
    Ar,
}

impl CsvLang {
    /// Resolver el código de idioma del query param; inglés por defecto
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("ar") => CsvLang::Ar,
            _ => CsvLang::En,
        }
    }

    fn headers(self) -> [&'static str; 8] {
        match self {
            CsvLang::En => [
                "ID",
                "From",
                "To",
                "Departure",
                "Arrival",
                "Company",
                "Seats",
                "Status",
            ],
            CsvLang::Ar => [
                "المعرف",
                "من",
                "إلى",
                "المغادرة",
                "الوصول",
                "الشركة",
                "المقاعد",
                "الحالة",
            ],
        }
    }

    fn status_label(self, is_active: bool) -> &'static str {
        match (self, is_active) {
            (CsvLang::En, true) => "active",
            (CsvLang::En, false) => "inactive",
            (CsvLang::Ar, true) => "فعالة",
            (CsvLang::Ar, false) => "موقوفة",
        }
    }
}

/// Serializar el listado filtrado a CSV
pub fn export_trips_csv(rows: &[TripListRow], lang: CsvLang) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(lang.headers())
        .map_err(|e| AppError::Internal(format!("Error writing CSV header: {}", e)))?;

    for row in rows {
        writer
            .write_record(&[
                row.id.to_string(),
                row.from_city.clone(),
                row.to_city.clone(),
                row.departure_time.format(DATETIME_FORMAT).to_string(),
                row.arrival_time.format(DATETIME_FORMAT).to_string(),
                row.company_name.clone(),
                row.seats_total.to_string(),
                lang.status_label(row.is_active).to_string(),
            ])
            .map_err(|e| AppError::Internal(format!("Error writing CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Error finishing CSV: {}", e)))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| AppError::Internal(format!("CSV output was not valid UTF-8: {}", e)))?;

    // BOM para compatibilidad con Excel
    Ok(format!("\u{feff}{}", body))
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

    fn row(from: &str, to: &str, company: &str, is_active: bool) -> TripListRow {
        TripListRow {
            id: Uuid::new_v4(),
            route_id: Uuid::new_v4(),
            from_city: from.to_string(),
            to_city: to.to_string(),
            company_name: company.to_string(),
            departure_time: ts("2024-06-01T08:00:00"),
            arrival_time: ts("2024-06-01T12:30:00"),
            duration_minutes: 270,
            seats_total: 44,
            is_active,
            price: None,
            currency: None,
        }
    }

    #[test]
    fn test_starts_with_bom() {
        let csv = export_trips_csv(&[], CsvLang::En).unwrap();
        assert!(csv.starts_with('\u{feff}'));
    }

    #[test]
    fn test_all_fields_are_quoted() {
        let csv = export_trips_csv(&[row("Damascus", "Aleppo", "Al-Kadmous", true)], CsvLang::En)
            .unwrap();
        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.contains("\"Damascus\""));
        assert!(data_line.contains("\"44\""));
        assert!(data_line.contains("\"active\""));
    }

    #[test]
    fn test_round_trip_preserves_commas_and_quotes() {
        let rows = vec![
            row("Deir ez-Zor", "Al-Bab, East", "Viajes \"El Rápido\"", true),
            row("Homs", "Tartus", "Al-Ahliah", false),
        ];
        let csv_text = export_trips_csv(&rows, CsvLang::En).unwrap();

        let mut reader = csv::Reader::from_reader(
            csv_text.trim_start_matches('\u{feff}').as_bytes(),
        );
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][2], "Al-Bab, East");
        assert_eq!(&records[0][5], "Viajes \"El Rápido\"");
        assert_eq!(&records[0][3], "2024-06-01 08:00");
        assert_eq!(&records[1][7], "inactive");
    }

    #[test]
    fn test_arabic_headers_and_status() {
        let csv_text =
            export_trips_csv(&[row("Damascus", "Aleppo", "Al-Kadmous", false)], CsvLang::Ar)
                .unwrap();
        let header_line = csv_text.lines().next().unwrap();
        assert!(header_line.contains("المغادرة"));
        let data_line = csv_text.lines().nth(1).unwrap();
        assert!(data_line.contains("موقوفة"));
    }

    #[test]
    fn test_lang_from_code_defaults_to_english() {
        assert_eq!(CsvLang::from_code(Some("ar")), CsvLang::Ar);
        assert_eq!(CsvLang::from_code(Some("en")), CsvLang::En);
        assert_eq!(CsvLang::from_code(None), CsvLang::En);
    }
}
