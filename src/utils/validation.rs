//! Utilidades de validación
//!
//! Funciones helper para validación de datos en la frontera HTTP,
//! antes de tocar los repositorios.

use num_traits::Zero;
use serde::Serialize;
use validator::ValidationError;

use crate::utils::errors::{validation_error, AppError};

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar un identificador recibido en el path o query string.
/// Los ids son enteros positivos asignados por el cliente; un valor
/// no positivo es un fallo de validación (422), nunca llega al store.
pub fn validate_path_id(id: i64) -> Result<(), AppError> {
    validate_positive(id).map_err(|_| validation_error("id", "must be a positive integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_path_id() {
        assert!(validate_path_id(1).is_ok());
        assert!(validate_path_id(0).is_err());
        assert!(validate_path_id(-10).is_err());
    }
}
