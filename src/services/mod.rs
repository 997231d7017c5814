//! Servicios de dominio
//!
//! Lógica pura que no toca la base de datos: alias de ciudades,
//! filtros del listado y serialización CSV.

pub mod city_alias;
pub mod csv_export;
pub mod trip_filter;
