//! Acceso a datos
//!
//! Un repositorio por tabla, con queries parametrizadas sobre el pool.

pub mod booking_repository;
pub mod city_repository;
pub mod company_repository;
pub mod fare_repository;
pub mod route_repository;
pub mod station_repository;
pub mod transport_type_repository;
pub mod trip_repository;
pub mod user_repository;
