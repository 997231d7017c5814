//! Routers HTTP por recurso

pub mod auth_routes;
pub mod booking_routes;
pub mod city_routes;
pub mod company_routes;
pub mod reference_routes;
pub mod route_routes;
pub mod trip_routes;
