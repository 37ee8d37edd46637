//! Controllers
//!
//! Traducen requests en llamadas a repositorios aplicando el protocolo
//! ordenado de checks de existencia y conflicto: padre primero, identidad
//! después, unicidad de nombre al final. El orden determina qué error se
//! reporta cuando hay varios problemas a la vez.

pub mod driver_controller;
pub mod fleet_controller;
pub mod route_controller;
pub mod route_detail_controller;
pub mod vehicle_controller;

pub use driver_controller::DriverController;
pub use fleet_controller::FleetController;
pub use route_controller::RouteController;
pub use route_detail_controller::RouteDetailController;
pub use vehicle_controller::VehicleController;
