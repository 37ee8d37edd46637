//! Store genérico de entidades
//!
//! Primitivas de lectura/borrado parametrizadas por tipo de entidad.
//! Las escrituras tipadas (insert/update con sus columnas concretas)
//! viven en cada repositorio; aquí sólo hay operaciones cuya forma es
//! idéntica para todas las tablas, más la clasificación de errores de
//! constraint y el constructor uniforme de predicados opcionales.

use sqlx::error::ErrorKind;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::utils::errors::AppError;

/// Entidad persistida en una tabla con columna `id`
pub trait Entity: for<'r> FromRow<'r, PgRow> + Unpin + Send + Sync {
    /// Nombre de la tabla en PostgreSQL
    const TABLE: &'static str;
}

/// Lookup puntual por id. La ausencia es un resultado válido, no un error.
pub async fn get<T: Entity>(pool: &PgPool, id: i64) -> Result<Option<T>, AppError> {
    let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::Database)
}

/// Scan completo de la tabla; el orden no está garantizado.
pub async fn get_all<T: Entity>(pool: &PgPool) -> Result<Vec<T>, AppError> {
    let sql = format!("SELECT * FROM {}", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .fetch_all(pool)
        .await
        .map_err(AppError::Database)
}

/// Borrado por id. Un id inexistente es un no-op; las cascadas sobre
/// dependientes las aplica el esquema (ON DELETE CASCADE), no este código.
pub async fn delete<T: Entity>(pool: &PgPool, id: i64) -> Result<(), AppError> {
    let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
    sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::Database)?;

    Ok(())
}

/// Lookup por igualdad sobre la columna `name`
pub async fn filter_by_name<T: Entity>(pool: &PgPool, name: &str) -> Result<Vec<T>, AppError> {
    let sql = format!("SELECT * FROM {} WHERE name = $1", T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(name)
        .fetch_all(pool)
        .await
        .map_err(AppError::Database)
}

/// Clasificar errores de escritura: las violaciones de constraint
/// (unicidad, clave foránea, not-null, check) se separan del resto de
/// fallos de base de datos. Llegan sólo cuando una carrera invalidó los
/// pre-checks del controller; el statement ya fue revertido.
pub(crate) fn map_write_error(e: sqlx::Error) -> AppError {
    let is_constraint = e
        .as_database_error()
        .map(|db| {
            matches!(
                db.kind(),
                ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation
            )
        })
        .unwrap_or(false);

    if is_constraint {
        AppError::Constraint(e.to_string())
    } else {
        AppError::Database(e)
    }
}

/// Constructor uniforme de predicados de igualdad opcionales: se añade un
/// predicado por filtro presente y se conjugan todos con AND. No hay árbol
/// de ramas por subconjunto de filtros.
#[derive(Debug, Default)]
pub(crate) struct SqlFilterBuilder {
    clauses: Vec<String>,
}

impl SqlFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añadir un predicado `columna = $n`; el placeholder posicional sigue
    /// el orden de inserción, que debe coincidir con el orden de los binds.
    pub fn equals(&mut self, column: &str) -> &mut Self {
        let placeholder = self.clauses.len() + 1;
        self.clauses.push(format!("{} = ${}", column, placeholder));
        self
    }

    /// Renderizar la cláusula WHERE; vacía si no hay predicados.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}
