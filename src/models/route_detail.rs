//! Modelo de RouteDetail (asignación)
//!
//! Una asignación vincula una ruta con el vehículo y el conductor que la
//! cubren. Su identidad es el par compuesto `(route_id, vehicle_id)`:
//! como máximo una fila por ruta + vehículo. Borrar la ruta, el vehículo
//! o el conductor elimina en cascada las asignaciones que lo referencian.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// RouteDetail principal - mapea exactamente a la tabla routedetail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct RouteDetail {
    pub route_id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
}

/// Request para crear una asignación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteDetailRequest {
    #[validate(range(min = 1, message = "route_id must be a positive integer"))]
    pub route_id: i64,

    #[validate(range(min = 1, message = "vehicle_id must be a positive integer"))]
    pub vehicle_id: i64,

    #[validate(range(min = 1, message = "driver_id must be a positive integer"))]
    pub driver_id: i64,
}

/// Filtros por nombre para la consulta central con join triple. Cualquier
/// subconjunto de los tres nombres puede omitirse; un nombre omitido no
/// impone predicado. Los tres ausentes devuelven vacío (guarda contra un
/// join sin acotar).
#[derive(Debug, Default, Deserialize)]
pub struct RouteDetailNameFilters {
    pub route_name: Option<String>,
    pub vehicle_name: Option<String>,
    pub driver_name: Option<String>,
}

impl RouteDetailNameFilters {
    pub fn is_empty(&self) -> bool {
        self.route_name.is_none() && self.vehicle_name.is_none() && self.driver_name.is_none()
    }
}

/// Query string para borrar una asignación exacta
#[derive(Debug, Deserialize)]
pub struct DeleteRouteDetailQuery {
    pub route_id: i64,
    pub vehicle_id: i64,
    pub driver_id: i64,
}
