//! Modelos de dominio
//!
//! Entidades persistidas y sus DTOs de request/filtro. Las respuestas de
//! la API son los propios structs de entidad: objetos planos que reflejan
//! los campos de cada tabla, sin representaciones anidadas.

pub mod driver;
pub mod fleet;
pub mod route;
pub mod route_detail;
pub mod vehicle;
