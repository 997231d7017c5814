//! Tabla de alias árabe-inglés de ciudades
//!
//! El autocompletado del panel acepta nombres en árabe o en inglés. La
//! tabla es estática y bidireccional: un prefijo árabe se resuelve al
//! nombre canónico en inglés antes de comparar. Solo hay matching por
//! prefijo, sin distancia de edición.

use lazy_static::lazy_static;

use crate::models::city::City;

lazy_static! {
    /// Pares (árabe, inglés canónico) de las ciudades sirias soportadas
    static ref CITY_ALIASES: Vec<(&'static str, &'static str)> = vec![
        ("دمشق", "Damascus"),
        ("حلب", "Aleppo"),
        ("حمص", "Homs"),
        ("حماة", "Hama"),
        ("اللاذقية", "Latakia"),
        ("طرطوس", "Tartus"),
        ("دير الزور", "Deir ez-Zor"),
        ("الرقة", "Raqqa"),
        ("الحسكة", "Hasakah"),
        ("القامشلي", "Qamishli"),
        ("درعا", "Daraa"),
        ("السويداء", "Sweida"),
        ("إدلب", "Idlib"),
        ("القنيطرة", "Quneitra"),
        ("تدمر", "Palmyra"),
        ("منبج", "Manbij"),
        ("عفرين", "Afrin"),
        ("أعزاز", "Azaz"),
        ("الباب", "Al-Bab"),
        ("جبلة", "Jableh"),
        ("بانياس", "Baniyas"),
        ("صافيتا", "Safita"),
        ("مصياف", "Masyaf"),
        ("السلمية", "Salamiyah"),
        ("التل", "Al-Tall"),
        ("دوما", "Douma"),
        ("داريا", "Darayya"),
        ("الزبداني", "Zabadani"),
        ("يبرود", "Yabroud"),
        ("النبك", "An-Nabk"),
        ("القصير", "Al-Qusayr"),
        ("تل أبيض", "Tal Abyad"),
        ("رأس العين", "Ras al-Ayn"),
        ("الميادين", "Al-Mayadin"),
        ("البوكمال", "Albu Kamal"),
    ];
}

/// Resolver un nombre árabe exacto a su nombre canónico en inglés
pub fn canonical_english(name: &str) -> Option<&'static str> {
    let needle = name.trim();
    CITY_ALIASES
        .iter()
        .find(|(ar, _)| *ar == needle)
        .map(|(_, en)| *en)
}

/// Resolver el nombre árabe de una ciudad a partir del inglés canónico
pub fn arabic_name(english: &str) -> Option<&'static str> {
    let needle = english.trim();
    CITY_ALIASES
        .iter()
        .find(|(_, en)| en.eq_ignore_ascii_case(needle))
        .map(|(ar, _)| *ar)
}

/// Nombres canónicos en inglés alcanzables desde un prefijo árabe
fn english_names_for_arabic_prefix(prefix: &str) -> Vec<&'static str> {
    CITY_ALIASES
        .iter()
        .filter(|(ar, _)| ar.starts_with(prefix))
        .map(|(_, en)| *en)
        .collect()
}

/// Matching de autocompletado sobre la lista de ciudades cargada.
///
/// Una ciudad entra en el resultado si su nombre en inglés empieza por el
/// input (case-insensitive) o si algún alias árabe que empiece por el
/// input resuelve a su nombre canónico.
pub fn match_cities(cities: &[City], input: &str) -> Vec<City> {
    let needle = input.trim();
    if needle.is_empty() {
        return Vec::new();
    }

    let needle_lower = needle.to_lowercase();
    let aliased: Vec<String> = english_names_for_arabic_prefix(needle)
        .into_iter()
        .map(|en| en.to_lowercase())
        .collect();

    cities
        .iter()
        .filter(|city| {
            let name_lower = city.name.to_lowercase();
            name_lower.starts_with(&needle_lower)
                || aliased.iter().any(|en| name_lower == *en)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn city(name: &str) -> City {
        City {
            id: Uuid::new_v4(),
            name: name.to_string(),
            country_code: Some("SY".to_string()),
            latitude: None,
            longitude: None,
        }
    }

    fn sample_cities() -> Vec<City> {
        vec![
            city("Damascus"),
            city("Aleppo"),
            city("Homs"),
            city("Hama"),
            city("Latakia"),
        ]
    }

    #[test]
    fn test_english_prefix_match_is_case_insensitive() {
        let cities = sample_cities();
        let matched = match_cities(&cities, "alep");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Aleppo");
    }

    #[test]
    fn test_shared_prefix_matches_multiple() {
        let cities = sample_cities();
        let matched = match_cities(&cities, "Ha");
        let names: Vec<&str> = matched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Hama"]);

        let matched = match_cities(&cities, "H");
        let names: Vec<&str> = matched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Homs", "Hama"]);
    }

    #[test]
    fn test_arabic_exact_alias() {
        let cities = sample_cities();
        let matched = match_cities(&cities, "حلب");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Aleppo");
    }

    #[test]
    fn test_arabic_partial_prefix() {
        let cities = sample_cities();
        // Prefijo de دمشق
        let matched = match_cities(&cities, "دمش");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Damascus");
    }

    #[test]
    fn test_empty_input_matches_nothing() {
        let cities = sample_cities();
        assert!(match_cities(&cities, "").is_empty());
        assert!(match_cities(&cities, "   ").is_empty());
    }

    #[test]
    fn test_canonical_english_lookup() {
        assert_eq!(canonical_english("دمشق"), Some("Damascus"));
        assert_eq!(canonical_english("Damascus"), None);
    }

    #[test]
    fn test_arabic_name_lookup() {
        assert_eq!(arabic_name("Damascus"), Some("دمشق"));
        assert_eq!(arabic_name("damascus"), Some("دمشق"));
        assert_eq!(arabic_name("Beirut"), None);
    }
}
