//! Fleet Registry
//!
//! Servicio de registros de flota: flotas, vehículos, conductores, rutas
//! y las asignaciones que vinculan una ruta con el vehículo y el conductor
//! que la cubren.

pub mod config;
pub mod controllers;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
