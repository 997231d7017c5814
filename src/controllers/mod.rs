//! Controllers
//!
//! Validación de dominio y orquestación entre repositorios; los handlers
//! HTTP de routes/ delegan aquí.

pub mod auth_controller;
pub mod booking_controller;
pub mod city_controller;
pub mod company_controller;
pub mod route_controller;
pub mod trip_controller;
