//! Routers de la API
//!
//! Un router por recurso bajo el prefijo singular, más las rutas plurales
//! de listado sin guarda (scan completo).

pub mod driver_routes;
pub mod fleet_routes;
pub mod route_detail_routes;
pub mod route_routes;
pub mod vehicle_routes;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(fleet_routes::create_fleet_router())
        .route("/fleets/", get(fleet_routes::list_fleets))
        .merge(vehicle_routes::create_vehicle_router())
        .route("/vehicles/", get(vehicle_routes::list_vehicles))
        .merge(driver_routes::create_driver_router())
        .route("/drivers/", get(driver_routes::list_drivers))
        .merge(route_routes::create_route_router())
        .route("/routes/", get(route_routes::list_routes))
        .merge(route_detail_routes::create_route_detail_router())
        .route(
            "/routedetails/",
            get(route_detail_routes::list_route_details),
        )
}
