//! Modelo de Fleet
//!
//! Una flota es la organización propietaria de vehículos. Su nombre es
//! único a nivel global; borrarla elimina en cascada sus vehículos y las
//! asignaciones que los referencian.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Fleet principal - mapea exactamente a la tabla fleets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Fleet {
    pub id: i64,
    pub name: String,
}

/// Request para crear una flota (el id lo asigna el cliente)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFleetRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Request para actualizar el nombre de una flota
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFleetRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Query string para búsqueda exacta por nombre
#[derive(Debug, Deserialize)]
pub struct FleetNameQuery {
    pub name: String,
}
