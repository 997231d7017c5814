//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod booking;
pub mod city;
pub mod company;
pub mod fare;
pub mod route;
pub mod station;
pub mod transport_type;
pub mod trip;
pub mod user;
