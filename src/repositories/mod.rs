//! Repositorios de persistencia
//!
//! Cada repositorio recibe el pool explícitamente en su constructor y
//! delega en el store genérico las operaciones de forma común.

pub mod driver_repository;
pub mod fleet_repository;
pub mod route_detail_repository;
pub mod route_repository;
pub mod store;
pub mod vehicle_repository;

pub use driver_repository::DriverRepository;
pub use fleet_repository::FleetRepository;
pub use route_detail_repository::RouteDetailRepository;
pub use route_repository::RouteRepository;
pub use vehicle_repository::VehicleRepository;
