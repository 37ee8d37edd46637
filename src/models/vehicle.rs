//! Modelo de Vehicle
//!
//! Cada vehículo pertenece exactamente a una flota (`owner_id`); un
//! vehículo sin propietario válido es inválido.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
}

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "owner_id must be a positive integer"))]
    pub owner_id: i64,
}

/// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "owner_id must be a positive integer"))]
    pub owner_id: i64,
}

/// Filtros para búsqueda de vehículos. Ambos son opcionales; si no se
/// suministra ninguno el handler devuelve vacío sin consultar (no existe
/// un "sin filtro significa todo" para este endpoint).
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub owner_id: Option<i64>,
    pub name: Option<String>,
}

impl VehicleFilters {
    pub fn is_empty(&self) -> bool {
        self.owner_id.is_none() && self.name.is_none()
    }
}
