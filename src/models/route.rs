//! Modelo de Route

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Route principal - mapea exactamente a la tabla routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: i64,
    pub name: String,
}

/// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Request para actualizar una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Query string para búsqueda por nombre
#[derive(Debug, Deserialize)]
pub struct RouteNameQuery {
    pub name: String,
}
