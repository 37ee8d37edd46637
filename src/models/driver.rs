//! Modelo de Driver

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Driver principal - mapea exactamente a la tabla drivers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: i64,
    pub name: String,
}

/// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Request para actualizar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Query string para búsqueda por nombre
#[derive(Debug, Deserialize)]
pub struct DriverNameQuery {
    pub name: String,
}
