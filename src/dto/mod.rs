//! DTOs de la API
//!
//! Requests y responses que cruzan la frontera HTTP. Los payloads se
//! validan aquí antes de llegar a los controllers.

pub mod auth_dto;
pub mod booking_dto;
pub mod city_dto;
pub mod company_dto;
pub mod reference_dto;
pub mod route_dto;
pub mod trip_dto;
